use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, Result};

/// 默认配置文件名（当前目录）
pub const DEFAULT_CONFIG_PATH: &str = "shortlink.toml";

/// 环境变量前缀，分隔符为 `__`
///
/// 示例：SLC__API__BASE_URL=http://localhost:8080/api/v1
pub const ENV_PREFIX: &str = "SLC";

/// 静态配置（从 TOML + 环境变量加载，启动时使用）
///
/// - api: 远端短链服务地址与超时
/// - storage: 会话 token 的持久化位置
/// - ui: 展示相关参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML > 默认值。加载失败时打印错误并回退到默认值，
    /// 与启动阶段尚未初始化日志系统的情况保持一致。
    pub fn load(path: Option<&str>) -> Self {
        match Self::load_from(path, None) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 可注入环境变量来源的加载入口
    ///
    /// `env` 为 `None` 时读取进程环境变量；测试中传入 map 以避免修改全局环境。
    pub fn load_from(path: Option<&str>, env: Option<HashMap<String, String>>) -> Result<Self> {
        use config::{Config, Environment, File};

        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（显式指定时必须存在）
            .add_source(File::with_name(path).required(explicit))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: ClientConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 校验跨字段约束
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            ClientError::config(format!("api.base_url '{}' is invalid: {}", self.api.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::config(format!(
                "api.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.storage.token_key.trim().is_empty() {
            return Err(ClientError::config("storage.token_key must not be empty"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ClientError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 全局请求超时（秒）；未设置时不额外限制
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// 会话 token 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

/// 展示配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// "Copied!" 提示的持续时间（毫秒）
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    /// 链接列表中创建日期的格式（本地时区，仅日期）
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "https://shorten.quocbui.dev/api/v1".to_string()
}

fn default_token_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("shortlink").join("session.toml"))
        .unwrap_or_else(|| PathBuf::from("shortlink_session.toml"))
}

fn default_token_key() -> String {
    "guest_token".to_string()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            token_key: default_token_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: default_copy_feedback_ms(),
            date_format: default_date_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
