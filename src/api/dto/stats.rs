//! DTOs for per-link statistics and traffic summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ClickEvent, Entry};

/// A single click in the statistics view.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl From<&ClickEvent> for ClickInfo {
    fn from(click: &ClickEvent) -> Self {
        Self {
            timestamp: click.timestamp,
            source: click.source.clone(),
            location: click.location.clone(),
        }
    }
}

/// Detailed statistics for one shortcode: metadata plus the full click log.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub total_clicks: usize,
    pub clicks: Vec<ClickInfo>,
}

impl StatsResponse {
    pub fn from_entry(entry: &Entry, expired: bool) -> Self {
        Self {
            code: entry.shortcode.clone(),
            target: entry.target.clone(),
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            expired,
            total_clicks: entry.click_count(),
            clicks: entry.clicks.iter().map(ClickInfo::from).collect(),
        }
    }
}

/// Text summary of a link's traffic.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub code: String,
    pub summary: String,
}
