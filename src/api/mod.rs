//! Remote shortening API: wire models, transport and client

pub mod client;
pub mod models;
pub mod transport;

pub use client::{ApiClient, LIST_PAGE, LIST_PER_PAGE};
pub use models::{
    Analytics, ApiEnvelope, CategoryCounts, CreatedLink, Link, LinkDetail, LinkPage, LoginData,
    ShortenData, ShortenRequest, UserInfo,
};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, UreqTransport};
