use std::time::{Duration, Instant};

use crate::view::{AnalyticsView, LinkListView, ResultView};

pub const SUBMIT_LABEL: &str = "Shorten";
pub const SUBMITTING_LABEL: &str = "Shortening...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// 表单输入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub url: String,
    pub alias: String,
}

impl FormState {
    pub fn clear(&mut self) {
        self.url.clear();
        self.alias.clear();
    }
}

/// Submission state machine
///
/// `Submitting` only lasts while a create request is in flight; both
/// outcomes re-enable the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Idle,
    Submitting,
    ResultShown,
    ErrorShown,
}

/// Transient "Copied!" label on the copy control
#[derive(Debug, Clone, PartialEq)]
pub struct CopyFeedback {
    duration: Duration,
    shown_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown_at: None,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.shown_at.is_some() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    pub fn is_active(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn trigger(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Revert once the duration has elapsed; `true` if the label changed
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.shown_at {
            Some(at) if now.saturating_duration_since(at) >= self.duration => {
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

/// Everything a surface needs to draw the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageModel {
    pub form: FormState,
    pub phase: PagePhase,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    /// `None` until a list has been loaded at least once
    pub links: Option<LinkListView>,
    pub link_total: Option<u64>,
    pub analytics: Option<AnalyticsView>,
    pub copy: CopyFeedback,
    /// Short code whose detail is on display
    pub selected: Option<String>,
    pub last_opened: Option<String>,
    /// Non-blocking status line (copy or navigation problems)
    pub notice: Option<String>,
}

impl PageModel {
    pub fn new(copy_feedback: Duration) -> Self {
        Self {
            copy: CopyFeedback::new(copy_feedback),
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == PagePhase::Submitting
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub(crate) fn begin_submit(&mut self) {
        self.phase = PagePhase::Submitting;
        self.hide_panels();
        self.notice = None;
    }

    /// Showing a result always hides the error panel
    pub(crate) fn show_result(&mut self, result: ResultView, analytics: Option<AnalyticsView>) {
        self.result = Some(result);
        self.analytics = analytics;
        self.error = None;
        self.phase = PagePhase::ResultShown;
    }

    /// Showing an error always hides the result panel
    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.result = None;
        self.analytics = None;
        self.selected = None;
        self.phase = PagePhase::ErrorShown;
    }

    fn hide_panels(&mut self) {
        self.result = None;
        self.analytics = None;
        self.error = None;
        self.selected = None;
        self.copy.shown_at = None;
    }
}
