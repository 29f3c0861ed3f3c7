//! Page controller
//!
//! `ClientController` owns the `PageModel` and performs every state
//! transition. Presentation layers (TUI, CLI, tests) feed it `UiEvent`s and
//! get the page back through `Surface::render` after each step, including
//! the intermediate "submitting" step while a request is in flight.

mod page;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

pub use page::{
    COPIED_LABEL, COPY_LABEL, CopyFeedback, FormState, PageModel, PagePhase, SUBMIT_LABEL,
    SUBMITTING_LABEL,
};

use crate::api::{ApiClient, ShortenRequest};
use crate::config::UiConfig;
use crate::errors::{ClientError, DETAIL_FAILURE_MESSAGE, Result};
use crate::view::{ResultView, analytics_view, link_list_view};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Page shown for the first time
    Loaded,
    Submit {
        url: String,
        alias: String,
        /// Hours; only the CLI sets this
        expires_in: Option<u32>,
    },
    /// A list row was activated (not its short-URL anchor)
    RowActivated { short_code: String },
    /// The short-URL anchor inside a row was activated
    AnchorActivated { short_url: String },
    CopyRequested,
    RefreshRequested,
}

/// Presentation layer driven by the controller
pub trait Surface {
    fn render(&mut self, page: &PageModel);

    /// Navigate to `url` (browser, system opener...)
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Clipboard capability
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// For environments without a clipboard
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(ClientError::clipboard("Clipboard not available"))
    }
}

/// Surface that draws nothing; one-shot CLI commands read the page afterwards
#[derive(Debug, Default)]
pub struct Headless;

impl Surface for Headless {
    fn render(&mut self, _page: &PageModel) {}

    fn open_url(&mut self, url: &str) -> Result<()> {
        debug!("Headless surface ignoring navigation to {}", url);
        Ok(())
    }
}

pub struct ClientController {
    api: Arc<ApiClient>,
    clipboard: Box<dyn Clipboard>,
    date_format: String,
    page: PageModel,
}

impl ClientController {
    pub fn new(api: Arc<ApiClient>, clipboard: Box<dyn Clipboard>, ui: &UiConfig) -> Self {
        Self {
            api,
            clipboard,
            date_format: ui.date_format.clone(),
            page: PageModel::new(Duration::from_millis(ui.copy_feedback_ms)),
        }
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    /// Form editing only; everything else goes through `dispatch`
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.page.form
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub async fn dispatch(&mut self, event: UiEvent, surface: &mut dyn Surface) {
        match event {
            UiEvent::Loaded | UiEvent::RefreshRequested => self.refresh_links(surface).await,
            UiEvent::Submit {
                url,
                alias,
                expires_in,
            } => self.submit(&url, &alias, expires_in, surface).await,
            UiEvent::RowActivated { short_code } => self.show_detail(&short_code, surface).await,
            UiEvent::AnchorActivated { short_url } => self.navigate(&short_url, surface),
            UiEvent::CopyRequested => self.copy_result(Instant::now(), surface),
        }
    }

    async fn submit(
        &mut self,
        url: &str,
        alias: &str,
        expires_in: Option<u32>,
        surface: &mut dyn Surface,
    ) {
        if self.page.is_submitting() {
            debug!("Submit ignored, a request is already in flight");
            return;
        }

        let request = ShortenRequest::new(url.trim())
            .alias(alias.trim())
            .expires_in(expires_in);

        self.page.begin_submit();
        surface.render(&self.page);

        let outcome = self.api.shorten_url(&request).await;

        let created = match outcome {
            Ok(data) => {
                self.page
                    .show_result(ResultView::from_created(&data.link), None);
                if let Some(token) = data.token.as_deref() {
                    match self.api.token_store().save(token) {
                        Ok(true) => info!("Session token saved"),
                        Ok(false) => debug!("Empty token in create response ignored"),
                        Err(e) => warn!("Failed to persist session token: {}", e),
                    }
                }
                self.page.form.clear();
                true
            }
            Err(e) => {
                warn!("Shorten failed: {}", e);
                self.page.show_error(e.message());
                false
            }
        };

        // show_result / show_error both leave Submitting
        surface.render(&self.page);

        if created {
            self.refresh_links(surface).await;
        }
    }

    /// Listing failures are only logged
    async fn refresh_links(&mut self, surface: &mut dyn Surface) {
        match self.api.list_my_links().await {
            Ok(Some(page)) => {
                self.page.links = Some(link_list_view(page.links(), &self.date_format));
                self.page.link_total = page.total;
                surface.render(&self.page);
            }
            Ok(None) => {}
            Err(e) => error!("Error loading links: {}", e),
        }
    }

    async fn show_detail(&mut self, short_code: &str, surface: &mut dyn Surface) {
        match self.api.fetch_link_detail(short_code).await {
            Ok(Some(detail)) => {
                self.page.show_result(
                    ResultView::from_link(&detail.link),
                    analytics_view(detail.analytics.as_ref()),
                );
                self.page.selected = Some(short_code.to_string());
                surface.render(&self.page);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Error loading link details for {}: {}", short_code, e);
                self.page.show_error(DETAIL_FAILURE_MESSAGE);
                surface.render(&self.page);
            }
        }
    }

    fn navigate(&mut self, short_url: &str, surface: &mut dyn Surface) {
        match surface.open_url(short_url) {
            Ok(()) => {
                self.page.last_opened = Some(short_url.to_string());
                self.page.notice = None;
            }
            Err(e) => {
                warn!("Failed to open {}: {}", short_url, e);
                self.page.notice = Some(e.format_simple());
            }
        }
        surface.render(&self.page);
    }

    /// Copy the displayed short URL
    pub fn copy_result(&mut self, now: Instant, surface: &mut dyn Surface) {
        let Some(short_url) = self.page.result.as_ref().map(|r| r.short_url.clone()) else {
            return;
        };

        match self.clipboard.set_text(&short_url) {
            Ok(()) => {
                self.page.copy.trigger(now);
                self.page.notice = None;
            }
            Err(e) => {
                warn!("Copy failed: {}", e);
                self.page.notice = Some(e.format_simple());
            }
        }
        surface.render(&self.page);
    }

    /// Expire time-based state; re-renders only when something changed
    pub fn tick(&mut self, now: Instant, surface: &mut dyn Surface) {
        if self.page.copy.expire(now) {
            surface.render(&self.page);
        }
    }
}
