use std::sync::{Arc, OnceLock};

use super::ClientConfig;

static CONFIG: OnceLock<Arc<ClientConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from `path` (or `shortlink.toml` in the current
/// directory) with `SLC__*` environment overrides. Subsequent calls are
/// no-ops and return the already installed instance.
///
/// # Examples
/// ```no_run
/// use shortlink_client::config::init_config;
/// let config = init_config(None);
/// println!("{}", config.api.base_url);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<ClientConfig> {
    CONFIG
        .get_or_init(|| Arc::new(ClientConfig::load(path)))
        .clone()
}
