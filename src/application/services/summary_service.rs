//! Traffic summarization for the statistics surface.
//!
//! Invoked on demand by the presentation layer, never by the registry
//! engine. Summarizers are infallible by contract: any internal failure or
//! absence of data yields a user-facing explanatory message instead of an
//! error.

use async_trait::async_trait;
use chrono::Timelike;
use std::collections::BTreeMap;

use crate::domain::entities::ClickEvent;

/// Turns a click history into a short human-readable summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrafficSummarizer: Send + Sync {
    async fn summarize(&self, clicks: &[ClickEvent]) -> String;
}

/// Aggregates the click log locally into one readable paragraph.
///
/// Reports click volume, time span, the dominant source and region, and
/// the peak hour of activity. A remote analysis backend can be substituted
/// behind the same trait.
#[derive(Debug, Default)]
pub struct LocalSummarizer;

impl LocalSummarizer {
    pub fn new() -> Self {
        Self
    }
}

fn top_label<'a>(counts: &'a BTreeMap<&str, usize>) -> Option<(&'a str, usize)> {
    counts
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(label, count)| (*label, *count))
}

#[async_trait]
impl TrafficSummarizer for LocalSummarizer {
    async fn summarize(&self, clicks: &[ClickEvent]) -> String {
        if clicks.is_empty() {
            return "No click data available to analyze.".to_string();
        }

        let mut sources: BTreeMap<&str, usize> = BTreeMap::new();
        let mut locations: BTreeMap<&str, usize> = BTreeMap::new();
        let mut hours: BTreeMap<u32, usize> = BTreeMap::new();

        for click in clicks {
            *sources.entry(click.source.as_str()).or_default() += 1;
            *locations.entry(click.location.as_str()).or_default() += 1;
            *hours.entry(click.timestamp.hour()).or_default() += 1;
        }

        // Insertion order is chronological, so first/last bound the span.
        let first = clicks.first().map(|c| c.timestamp);
        let last = clicks.last().map(|c| c.timestamp);

        let mut summary = format!("This link received {} click(s)", clicks.len());

        if let (Some(first), Some(last)) = (first, last) {
            if first == last {
                summary.push_str(&format!(" on {}", first.format("%Y-%m-%d %H:%M UTC")));
            } else {
                summary.push_str(&format!(
                    " between {} and {}",
                    first.format("%Y-%m-%d %H:%M UTC"),
                    last.format("%Y-%m-%d %H:%M UTC")
                ));
            }
        }
        summary.push('.');

        if let Some((source, count)) = top_label(&sources) {
            summary.push_str(&format!(
                " The most common traffic source was {} ({} click(s)).",
                source, count
            ));
        }

        if let Some((location, count)) = top_label(&locations) {
            summary.push_str(&format!(
                " Most visitors came from {} ({} click(s)).",
                location, count
            ));
        }

        if let Some((hour, _)) = hours.iter().max_by_key(|(_, count)| **count) {
            summary.push_str(&format!(
                " Activity peaked around {:02}:00 UTC.",
                hour
            ));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn click(offset_minutes: i64, source: &str, location: &str) -> ClickEvent {
        ClickEvent::new(
            Utc::now() + Duration::minutes(offset_minutes),
            source.to_string(),
            location.to_string(),
        )
    }

    #[tokio::test]
    async fn test_summarize_empty_history() {
        let summarizer = LocalSummarizer::new();
        let text = summarizer.summarize(&[]).await;

        assert_eq!(text, "No click data available to analyze.");
    }

    #[tokio::test]
    async fn test_summarize_reports_volume_and_top_labels() {
        let summarizer = LocalSummarizer::new();
        let clicks = vec![
            click(0, "Direct", "Europe"),
            click(1, "Direct", "Asia"),
            click(2, "Social Media", "Europe"),
        ];

        let text = summarizer.summarize(&clicks).await;

        assert!(text.contains("3 click(s)"));
        assert!(text.contains("Direct (2 click(s))"));
        assert!(text.contains("Europe (2 click(s))"));
    }

    #[tokio::test]
    async fn test_summarize_single_click_uses_single_instant() {
        let summarizer = LocalSummarizer::new();
        let clicks = vec![click(0, "Email Campaign", "Oceania")];

        let text = summarizer.summarize(&clicks).await;

        assert!(text.contains("1 click(s) on "));
        assert!(!text.contains("between"));
    }
}
