//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Entry;

/// One row of the link listing, most recent first.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub code: String,
    pub target: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: usize,
}

impl LinkSummary {
    pub fn from_entry(entry: &Entry, short_url: String) -> Self {
        Self {
            code: entry.shortcode.clone(),
            target: entry.target.clone(),
            short_url,
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            click_count: entry.click_count(),
        }
    }
}

/// Full listing of registered links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkSummary>,
}
