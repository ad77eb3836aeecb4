//! Pluggable click classification.
//!
//! Assigns a source/location label to a click at record time. The shipped
//! [`RandomClassifier`] is a placeholder policy; a real referrer/geo-IP
//! detector can be substituted behind the same trait without touching the
//! registry engine.

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use crate::error::AppError;

/// Request-side context available when a click is recorded.
///
/// All fields are optional to handle missing headers gracefully.
#[derive(Debug, Clone, Default)]
pub struct ClickContext {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip: Option<String>,
}

/// Labels assigned to a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub source: String,
    pub location: String,
}

impl Classification {
    /// Fallback used when a classifier fails; recording still proceeds.
    pub fn unknown() -> Self {
        Self {
            source: "Unknown".to_string(),
            location: "Unknown".to_string(),
        }
    }
}

/// Assigns source/location labels to a click event.
///
/// Implementations must be thread-safe. Failures are degraded to
/// [`Classification::unknown`] by the engine rather than failing the
/// recording operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickClassifier: Send + Sync {
    async fn classify(&self, ctx: &ClickContext) -> Result<Classification, AppError>;
}

/// Traffic source labels used by the placeholder policy.
const SOURCES: &[&str] = &["Direct", "Social Media", "Search Engine", "Email Campaign"];

/// Geographic region labels used by the placeholder policy.
const LOCATIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Africa",
    "Oceania",
];

/// Uniform random pick over a bounded label set.
///
/// Stands in for real referrer/geo-IP detection; the context is ignored.
#[derive(Debug, Default)]
pub struct RandomClassifier;

impl RandomClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClickClassifier for RandomClassifier {
    async fn classify(&self, _ctx: &ClickContext) -> Result<Classification, AppError> {
        let mut rng = rand::rng();
        let source = SOURCES.choose(&mut rng).copied().unwrap_or("Direct");
        let location = LOCATIONS.choose(&mut rng).copied().unwrap_or("Europe");

        Ok(Classification {
            source: source.to_string(),
            location: location.to_string(),
        })
    }
}
