//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Entry;

/// Request to register a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The target URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-supplied shortcode, used verbatim after trimming.
    pub custom_code: Option<String>,

    /// Validity in minutes. `0` means the link never expires; absent uses
    /// the configured default.
    pub validity_minutes: Option<u32>,
}

/// A freshly registered short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: Uuid,
    pub code: String,
    pub target: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenResponse {
    pub fn from_entry(entry: &Entry, short_url: String) -> Self {
        Self {
            id: entry.id,
            code: entry.shortcode.clone(),
            target: entry.target.clone(),
            short_url,
            created_at: entry.created_at,
            expires_at: entry.expires_at,
        }
    }
}
