//! Registry entry entity mapping a shortcode to its target.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::click::ClickEvent;

/// A registered shortcode with its target and click history.
///
/// Created exactly once by the registry engine, mutated only by appends to
/// `clicks`, never deleted. `shortcode` is unique across all entries, live
/// or expired; codes are not recycled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    /// Destination resource locator, opaque to the engine, never mutated.
    pub target: String,
    /// Case-sensitive unique key, immutable after creation.
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    /// `None` means the entry never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Insertion order equals chronological order.
    pub clicks: Vec<ClickEvent>,
}

impl Entry {
    /// Creates a fresh entry with an empty click history.
    pub fn new(
        target: String,
        shortcode: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            shortcode,
            created_at,
            expires_at,
            clicks: Vec::new(),
        }
    }

    /// Returns true if the entry is expired as observed at `now`.
    ///
    /// Takes the observing instant explicitly; the engine supplies it from
    /// its injected clock.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}
