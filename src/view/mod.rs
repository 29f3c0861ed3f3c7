//! View-models for the result, link list and analytics panels
//!
//! Everything here is a pure function of API data; surfaces decide how to
//! draw the result.

pub(crate) mod qr;

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use tracing::debug;

pub use qr::{QrBitmap, decode_data_url};

use crate::api::{Analytics, CategoryCounts, CreatedLink, Link};

pub const EMPTY_LIST_MESSAGE: &str = "No links yet";
pub const DIRECT_REFERER_LABEL: &str = "Direct";
pub const TOP_REFERERS: usize = 5;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short URL and optional QR image
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub short_url: String,
    /// Raw `data:` URL as sent by the server
    pub qr_code: Option<String>,
    /// `qr_code` decoded; `None` when absent or undecodable
    pub qr_image: Option<QrBitmap>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ResultView {
    pub fn new(
        short_url: impl Into<String>,
        qr_code: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        let qr_code = non_empty(qr_code);
        let qr_image = qr_code.as_deref().and_then(|qr| {
            QrBitmap::from_data_url(qr)
                .map_err(|e| debug!("QR code not drawable: {}", e))
                .ok()
        });
        Self {
            short_url: short_url.into(),
            qr_code,
            qr_image,
            expires_at,
        }
    }

    pub fn from_created(link: &CreatedLink) -> Self {
        Self::new(
            link.short_url.clone(),
            link.qr_code.as_deref(),
            link.expires_at,
        )
    }

    pub fn from_link(link: &Link) -> Self {
        Self::new(
            link.short_url.clone(),
            link.qr_code.as_deref(),
            link.expires_at,
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkRow {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    /// e.g. "3 clicks"
    pub clicks: String,
    /// Local date only
    pub created: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkListView {
    Empty,
    Rows(Vec<LinkRow>),
}

impl LinkListView {
    pub fn rows(&self) -> &[LinkRow] {
        match self {
            LinkListView::Empty => &[],
            LinkListView::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LinkListView::Empty)
    }
}

pub fn link_list_view(links: &[Link], date_format: &str) -> LinkListView {
    if links.is_empty() {
        return LinkListView::Empty;
    }

    LinkListView::Rows(
        links
            .iter()
            .map(|link| LinkRow {
                short_code: link.short_code.clone(),
                short_url: link.short_url.clone(),
                original_url: link.original_url.clone(),
                clicks: format!("{} clicks", link.click_count),
                created: format_local_date(&link.created_at, date_format),
            })
            .collect(),
    )
}

/// Format in the local timezone; an invalid format string falls back to ISO date
pub fn format_local_date(at: &DateTime<Utc>, date_format: &str) -> String {
    let local = at.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", local.format(FALLBACK_DATE_FORMAT));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEntry {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSection {
    pub title: &'static str,
    pub entries: Vec<AnalyticsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsView {
    pub total_clicks: u64,
    pub sections: Vec<AnalyticsSection>,
}

/// `None` hides the panel: no analytics, or nobody clicked yet
pub fn analytics_view(analytics: Option<&Analytics>) -> Option<AnalyticsView> {
    let analytics = analytics?;
    if analytics.total_clicks == 0 {
        return None;
    }

    let sections = [
        section("Countries", &analytics.countries, None),
        section("Devices", &analytics.devices, None),
        section("Browsers", &analytics.browsers, None),
        section("Operating Systems", &analytics.os, None),
        section("Referers", &analytics.referers, Some(TOP_REFERERS)),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(AnalyticsView {
        total_clicks: analytics.total_clicks,
        sections,
    })
}

fn section(
    title: &'static str,
    counts: &CategoryCounts,
    limit: Option<usize>,
) -> Option<AnalyticsSection> {
    if counts.is_empty() {
        return None;
    }

    let mut entries: Vec<AnalyticsEntry> = counts
        .entries()
        .iter()
        .map(|(label, count)| AnalyticsEntry {
            label: label.clone(),
            count: *count,
        })
        .collect();
    // stable: equal counts keep server order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    if let Some(limit) = limit {
        entries.truncate(limit);
        for entry in &mut entries {
            if entry.label.is_empty() {
                entry.label = DIRECT_REFERER_LABEL.to_string();
            }
        }
    }

    Some(AnalyticsSection { title, entries })
}
