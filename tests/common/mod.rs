//! Shared test doubles
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use shortlink_client::api::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use shortlink_client::config::UiConfig;
use shortlink_client::controller::{ClientController, Clipboard, PageModel, Surface};
use shortlink_client::errors::{ClientError, Result};
use shortlink_client::storage::{MemoryTokenStore, TokenStore};

pub const BASE_URL: &str = "http://api.test/api/v1";

/// Transport that replays canned responses and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
    /// Token store snapshot taken when each request is sent
    observed_tokens: Mutex<Vec<Option<String>>>,
    store: Mutex<Option<Arc<dyn TokenStore>>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, err: ClientError) -> &Self {
        self.responses.lock().push_back(Err(err));
        self
    }

    pub fn watch_store(&self, store: Arc<dyn TokenStore>) {
        *self.store.lock() = Some(store);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn observed_tokens(&self) -> Vec<Option<String>> {
        self.observed_tokens.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let snapshot = self.store.lock().as_ref().and_then(|s| s.get());
        self.observed_tokens.lock().push(snapshot);
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("no scripted response")))
    }
}

/// Surface that keeps a snapshot of every rendered page
#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<PageModel>,
    pub opened: Vec<String>,
}

impl Surface for RecordingSurface {
    fn render(&mut self, page: &PageModel) {
        self.frames.push(page.clone());
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.copied.lock().push(text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub api: Arc<ApiClient>,
}

impl Harness {
    pub fn new(token: Option<&str>) -> Self {
        let transport = ScriptedTransport::new();
        let tokens = Arc::new(match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        });
        transport.watch_store(tokens.clone());
        let api = Arc::new(ApiClient::new(BASE_URL, tokens.clone(), transport.clone()));
        Self {
            transport,
            tokens,
            api,
        }
    }

    pub fn controller(&self, clipboard: RecordingClipboard) -> ClientController {
        ClientController::new(self.api.clone(), Box::new(clipboard), &UiConfig::default())
    }
}

pub fn link_json(code: &str, clicks: u64) -> String {
    format!(
        r#"{{"short_code": "{code}", "short_url": "https://s.example/{code}",
            "original_url": "https://example.com/{code}", "click_count": {clicks},
            "created_at": "2024-06-15T12:00:00Z"}}"#
    )
}

pub fn list_body(codes: &[&str]) -> String {
    let links: Vec<String> = codes.iter().map(|c| link_json(c, 1)).collect();
    format!(
        r#"{{"data": {{"links": [{}], "total": {}, "page": 1, "per_page": 10}}}}"#,
        links.join(","),
        codes.len()
    )
}

pub fn created_body(short_url: &str, token: Option<&str>) -> String {
    match token {
        Some(token) => format!(
            r#"{{"data": {{"link": {{"short_url": "{short_url}", "qr_code": "data:image/png;base64,AA=="}}, "token": "{token}"}}}}"#
        ),
        None => format!(r#"{{"data": {{"link": {{"short_url": "{short_url}"}}}}}}"#),
    }
}
