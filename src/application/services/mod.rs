//! Application services orchestrating domain logic.

pub mod registry_service;
pub mod summary_service;

pub use registry_service::{
    ClickOutcome, MAX_GENERATION_ATTEMPTS, RegistryService, Resolution, ResolveStatus,
};
pub use summary_service::{LocalSummarizer, TrafficSummarizer};
