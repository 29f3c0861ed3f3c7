//! Shortening API client
//!
//! Wraps the four remote operations the client needs. The session token is
//! read from the `TokenStore` on every call so that a token persisted after
//! a create is used by the very next request.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::models::{
    ApiEnvelope, ErrorBody, LinkDetail, LinkPage, LoginData, LoginRequest, ShortenData,
    ShortenRequest,
};
use super::transport::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
use crate::config::ApiConfig;
use crate::errors::{ClientError, Result, SHORTEN_FALLBACK_MESSAGE};
use crate::storage::TokenStore;

/// The list view always asks for the first page
pub const LIST_PAGE: u32 = 1;
pub const LIST_PER_PAGE: u32 = 10;

const LIST_FALLBACK_MESSAGE: &str = "Failed to load links";
const DETAIL_FALLBACK_MESSAGE: &str = "Failed to load link details";
const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";

pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            transport,
        }
    }

    /// Production client over `ureq`
    pub fn from_config(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let transport = UreqTransport::new(config.timeout_secs.map(Duration::from_secs));
        Self::new(config.base_url.clone(), tokens, Arc::new(transport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn has_token(&self) -> bool {
        self.tokens.get().is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /shorten`
    ///
    /// Anonymous when no token is stored. The returned token (if any) is
    /// not persisted here; the caller decides when to save it.
    pub async fn shorten_url(&self, request: &ShortenRequest) -> Result<ShortenData> {
        let body = serde_json::to_string(request)?;
        let http = HttpRequest::post_json(self.endpoint("/shorten"), body)
            .with_bearer(self.tokens.get());

        let response = self.transport.send(http).await?;
        if !response.is_success() {
            return Err(api_error(&response, SHORTEN_FALLBACK_MESSAGE));
        }

        let envelope: ApiEnvelope<ShortenData> = decode(&response)?;
        info!("Short link created: {}", envelope.data.link.short_url);
        Ok(envelope.data)
    }

    /// `GET /me/links?page=1&per_page=10`
    ///
    /// `Ok(None)` without touching the network when no token is stored.
    pub async fn list_my_links(&self) -> Result<Option<LinkPage>> {
        let Some(token) = self.tokens.get() else {
            debug!("No session token, skipping link list");
            return Ok(None);
        };

        let url = format!(
            "{}?page={}&per_page={}",
            self.endpoint("/me/links"),
            LIST_PAGE,
            LIST_PER_PAGE
        );
        let response = self
            .transport
            .send(HttpRequest::get(url).with_bearer(Some(token)))
            .await?;
        if !response.is_success() {
            return Err(api_error(&response, LIST_FALLBACK_MESSAGE));
        }

        let envelope: ApiEnvelope<LinkPage> = decode(&response)?;
        debug!("Loaded {} links", envelope.data.links().len());
        Ok(Some(envelope.data))
    }

    /// `GET /me/links/{code}`
    ///
    /// `Ok(None)` without touching the network when no token is stored.
    pub async fn fetch_link_detail(&self, short_code: &str) -> Result<Option<LinkDetail>> {
        let Some(token) = self.tokens.get() else {
            debug!("No session token, skipping detail fetch for {}", short_code);
            return Ok(None);
        };

        let url = self.endpoint(&format!("/me/links/{}", urlencoding::encode(short_code)));
        let response = self
            .transport
            .send(HttpRequest::get(url).with_bearer(Some(token)))
            .await?;
        if !response.is_success() {
            return Err(api_error(&response, DETAIL_FALLBACK_MESSAGE));
        }

        let envelope: ApiEnvelope<LinkDetail> = decode(&response)?;
        Ok(Some(envelope.data))
    }

    /// `POST /auth/login`, persisting the returned token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::validation("Email and password are required"));
        }

        let body = serde_json::to_string(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .transport
            .send(HttpRequest::post_json(self.endpoint("/auth/login"), body))
            .await?;
        if !response.is_success() {
            return Err(api_error(&response, LOGIN_FALLBACK_MESSAGE));
        }

        let envelope: ApiEnvelope<LoginData> = decode(&response)?;
        if !self.tokens.save(&envelope.data.token)? {
            return Err(ClientError::decode("Login response did not contain a token"));
        }
        info!("Logged in as {}", email.trim());
        Ok(envelope.data)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_str(&response.body)
        .map_err(|e| ClientError::decode(format!("Unexpected response from server: {}", e)))
}

/// Server message from an error body, else `fallback`
fn api_error(response: &HttpResponse, fallback: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| fallback.to_string());
    debug!("API error {}: {}", response.status, message);
    ClientError::api(response.status, message)
}
