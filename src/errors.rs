use std::fmt;

/// Fallback shown when a failed create response carries no usable message.
pub const SHORTEN_FALLBACK_MESSAGE: &str = "Failed to shorten URL";

/// Fixed message for a failed detail fetch; the underlying cause is only logged.
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load link details";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never produced an HTTP response (DNS, connect, TLS, timeout)
    Network(String),
    /// Server answered with a non-2xx status
    Api { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
    TokenStorage(String),
    Config(String),
    Clipboard(String),
    Validation(String),
    FileOperation(String),
}

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "C001",
            ClientError::Api { .. } => "C002",
            ClientError::Decode(_) => "C003",
            ClientError::TokenStorage(_) => "C004",
            ClientError::Config(_) => "C005",
            ClientError::Clipboard(_) => "C006",
            ClientError::Validation(_) => "C007",
            ClientError::FileOperation(_) => "C008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "Network Error",
            ClientError::Api { .. } => "API Error",
            ClientError::Decode(_) => "Invalid Response",
            ClientError::TokenStorage(_) => "Token Storage Error",
            ClientError::Config(_) => "Configuration Error",
            ClientError::Clipboard(_) => "Clipboard Error",
            ClientError::Validation(_) => "Validation Error",
            ClientError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    ///
    /// For `Api` errors this is exactly the server-supplied message (or the
    /// fallback chosen when the body had none), which is what the error
    /// panel displays.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Network(msg) => msg,
            ClientError::Api { message, .. } => message,
            ClientError::Decode(msg) => msg,
            ClientError::TokenStorage(msg) => msg,
            ClientError::Config(msg) => msg,
            ClientError::Clipboard(msg) => msg,
            ClientError::Validation(msg) => msg,
            ClientError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏与日志）
    pub fn format_simple(&self) -> String {
        match self {
            ClientError::Api { status, message } => {
                format!("{} ({}): {}", self.error_type(), status, message)
            }
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 便捷的构造函数
impl ClientError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        ClientError::Network(msg.into())
    }

    pub fn api<T: Into<String>>(status: u16, msg: T) -> Self {
        ClientError::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ClientError::Decode(msg.into())
    }

    pub fn token_storage<T: Into<String>>(msg: T) -> Self {
        ClientError::TokenStorage(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClientError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ClientError::Clipboard(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ClientError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::TokenStorage(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::TokenStorage(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
