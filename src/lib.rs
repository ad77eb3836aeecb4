//! # QuantumLeap
//!
//! A URL shortener with TTL expiry and click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the entry store trait,
//!   and the injected clock/classifier seams
//! - **Application Layer** ([`application`]) - The registry engine and the
//!   traffic summarizer
//! - **Infrastructure Layer** ([`infrastructure`]) - Blob stores (memory,
//!   Redis) and the repository over them
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom shortcodes with strict no-collision semantics
//! - Per-link TTL expiry; expired links resolve with their data intact
//! - Append-only click ledger with pluggable source/location labeling
//! - On-demand traffic summaries
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: persist entries in Redis instead of process memory
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClickOutcome, LocalSummarizer, RegistryService, Resolution, ResolveStatus,
        TrafficSummarizer,
    };
    pub use crate::domain::classifier::{ClickClassifier, ClickContext, RandomClassifier};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{ClickEvent, Entry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{KvEntryRepository, MemoryBlobStore};
    pub use crate::state::AppState;
}
