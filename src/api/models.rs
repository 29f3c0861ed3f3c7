//! Wire types for the shortening API
//!
//! Every success body is wrapped as `{"data": ...}`. Response types only
//! derive `Deserialize`; the client never sends links back.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Standard success wrapper
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Body of `POST /shorten`
///
/// Blank aliases are dropped at construction so the key is omitted from the
/// JSON entirely instead of being sent as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Lifetime in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: None,
            expires_in: None,
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string()).filter(|a| !a.trim().is_empty());
        self
    }

    pub fn expires_in(mut self, hours: Option<u32>) -> Self {
        self.expires_in = hours;
        self
    }
}

/// Link as returned by the create call; only `short_url` is guaranteed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedLink {
    pub short_url: String,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShortenData {
    pub link: CreatedLink,
    /// Guest token, issued on the first anonymous create
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(default)]
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One page of `GET /me/links`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LinkPage {
    #[serde(default)]
    pub links: Option<Vec<Link>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl LinkPage {
    /// Links on this page; a null or missing list is empty
    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkDetail {
    pub link: Link,
    #[serde(default)]
    pub analytics: Option<Analytics>,
}

/// Per-link click breakdown
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default, alias = "country_stats")]
    pub countries: CategoryCounts,
    #[serde(default, alias = "device_stats")]
    pub devices: CategoryCounts,
    #[serde(default, alias = "browser_stats")]
    pub browsers: CategoryCounts,
    #[serde(default, alias = "os_stats")]
    pub os: CategoryCounts,
    #[serde(default, alias = "referer_stats")]
    pub referers: CategoryCounts,
}

/// `label -> count` map that keeps the order the server sent.
///
/// Ties in the descending sort fall back to this order, so a sorted map
/// type would change what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts(Vec<(String, u64)>);

impl CategoryCounts {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category label to count, or null")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryCounts::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryCounts::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, count)) = map.next_entry::<String, u64>()? {
                    entries.push((label, count));
                }
                Ok(CategoryCounts(entries))
            }
        }

        deserializer.deserialize_any(CountsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<u64>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Error body of a non-2xx response.
///
/// The backend sends `{"error": {"code", "message"}}`, some routes a bare
/// `{"message"}` or `{"error": "..."}`; all three are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// First non-empty message, top-level `message` winning
    pub fn into_message(self) -> Option<String> {
        let nested = match self.error {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Object(obj)) => obj
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            _ => None,
        };

        self.message
            .filter(|m| !m.is_empty())
            .or(nested.filter(|m| !m.is_empty()))
    }
}
