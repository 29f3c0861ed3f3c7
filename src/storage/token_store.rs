//! Session token persistence
//!
//! A single bearer token lives under a fixed key. The file-backed store reads
//! the file on every `get` so that a token written by another process (a CLI
//! `login` while the TUI is open) is picked up on the next request.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::{ClientError, Result};

/// Token persistence capability
pub trait TokenStore: Send + Sync {
    /// Current token, if any. Never has side effects.
    fn get(&self) -> Option<String>;

    /// Unconditionally persist `token`, replacing any previous value
    fn set(&self, token: &str) -> Result<()>;

    /// Human readable location, shown by `shortlink token`
    fn location(&self) -> String;

    /// Persist `token` unless it is empty.
    ///
    /// Returns `Ok(false)` for the no-op case so an empty value from the
    /// server can never wipe a stored token.
    fn save(&self, token: &str) -> Result<bool> {
        if token.is_empty() {
            return Ok(false);
        }
        self.set(token)?;
        Ok(true)
    }
}

/// Token stored as one key of a small TOML file
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Option<toml::Table>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.parse::<toml::Table>()?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::token_storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let table = match self.read_table() {
            Ok(Some(table)) => table,
            Ok(None) => return None,
            Err(e) => {
                warn!("Ignoring unreadable token file: {}", e);
                return None;
            }
        };

        table
            .get(&self.key)
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    fn set(&self, token: &str) -> Result<()> {
        // Keep unrelated keys; a corrupt file is replaced.
        let mut table = match self.read_table() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                warn!("Overwriting unreadable token file: {}", e);
                toml::Table::new()
            }
        };
        table.insert(self.key.clone(), toml::Value::String(token.to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, toml::to_string(&table)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!("Session token written to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        format!("{} (key: {})", self.path.display(), self.key)
    }
}

/// Process-local token store (tests, `--ephemeral`)
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory (not persisted)".to_string()
    }
}
