//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{RegistryService, TrafficSummarizer};
use crate::infrastructure::persistence::KvEntryRepository;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistryService<KvEntryRepository>>,
    pub summarizer: Arc<dyn TrafficSummarizer>,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        registry: Arc<RegistryService<KvEntryRepository>>,
        summarizer: Arc<dyn TrafficSummarizer>,
        base_url: String,
    ) -> Self {
        Self {
            registry,
            summarizer,
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
