//! Per-invocation client context
//!
//! Created once per CLI invocation or TUI session from the loaded
//! configuration. Owns the API client and its token store.

use std::sync::Arc;

use tracing::debug;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::controller::{ClientController, Clipboard};
use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

pub struct ClientContext {
    config: Arc<ClientConfig>,
    api: Arc<ApiClient>,
}

impl ClientContext {
    /// Production wiring: `ureq` transport plus a file (or memory) token store
    pub fn from_config(config: Arc<ClientConfig>, ephemeral: bool) -> Self {
        let tokens: Arc<dyn TokenStore> = if ephemeral {
            debug!("Using in-memory token store");
            Arc::new(MemoryTokenStore::new())
        } else {
            Arc::new(FileTokenStore::new(
                config.storage.token_file.clone(),
                config.storage.token_key.clone(),
            ))
        };
        debug!("API base: {}, token store: {}", config.api.base_url, tokens.location());

        let api = Arc::new(ApiClient::from_config(&config.api, tokens));
        Self { config, api }
    }

    /// Context with a pre-built client (tests, embedding)
    pub fn with_api(config: Arc<ClientConfig>, api: Arc<ApiClient>) -> Self {
        Self { config, api }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn controller(&self, clipboard: Box<dyn Clipboard>) -> ClientController {
        ClientController::new(self.api.clone(), clipboard, &self.config.ui)
    }
}
