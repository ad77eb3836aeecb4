//! Click event entity, an append-only member of an entry's click history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded click on a shortened link.
///
/// Immutable once created. The `source` and `location` labels come from the
/// pluggable [`crate::domain::classifier::ClickClassifier`], not from the
/// registry engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Instant the click occurred.
    pub timestamp: DateTime<Utc>,
    /// Referrer/channel label (e.g. "Direct", "Social Media").
    pub source: String,
    /// Geographic origin label (e.g. "Europe", "Asia").
    pub location: String,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(timestamp: DateTime<Utc>, source: String, location: String) -> Self {
        Self {
            timestamp,
            source,
            location,
        }
    }
}
