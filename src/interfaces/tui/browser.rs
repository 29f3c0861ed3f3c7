//! Open a URL with the platform's default handler

use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{ClientError, Result};

fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    // No shell: the URL comes from the server and must stay one argument
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("rundll32.exe");
        cmd.args(["url.dll,FileProtocolHandler", url]);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Only http(s) URLs are handed to the opener
pub fn open_in_browser(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ClientError::validation(format!("Not a valid URL '{}': {}", url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::validation(format!(
            "Refusing to open non-web URL '{}'",
            url
        )));
    }

    let mut cmd = opener_command(parsed.as_str());
    debug!("Launching {:?}", cmd);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClientError::file_operation(format!("Failed to launch browser: {}", e)))?;
    Ok(())
}
