//! HTTP transport seam
//!
//! `ApiClient` only ever sees `HttpRequest`/`HttpResponse`. Non-2xx statuses
//! come back as ordinary responses; `Err` means no response was received.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};
use ureq::Agent;

use crate::errors::{ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON body, POST only
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            bearer: None,
            body: Some(body),
        }
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Blocking `ureq` agent driven from `spawn_blocking`
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    fn send_blocking(agent: &Agent, request: &HttpRequest) -> Result<HttpResponse> {
        let auth = request
            .bearer
            .as_ref()
            .map(|token| format!("Bearer {}", token));

        let response = match request.method {
            HttpMethod::Get => {
                let mut builder = agent
                    .get(&request.url)
                    .header("Accept", "application/json");
                if let Some(auth) = &auth {
                    builder = builder.header("Authorization", auth);
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = agent
                    .post(&request.url)
                    .header("Accept", "application/json")
                    .header("Content-Type", "application/json");
                if let Some(auth) = &auth {
                    builder = builder.header("Authorization", auth);
                }
                builder.send(request.body.as_deref().unwrap_or(""))?
            }
        };

        let status = response.status().as_u16();
        let body = response.into_body().read_to_string()?;
        trace!("{} {} -> {} ({} bytes)", request.method, request.url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method, request.url);
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || Self::send_blocking(&agent, &request))
            .await
            .map_err(|e| ClientError::network(format!("Request task failed: {}", e)))?
    }
}
