//! Domain layer containing business entities and capability seams.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and capability traits defined here are implemented
//! elsewhere and injected into the registry engine
//! (see [`crate::application::services`]).
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Entry store trait definition
//! - [`clock`] - Injected time source
//! - [`classifier`] - Pluggable click source/location labeling

pub mod classifier;
pub mod clock;
pub mod entities;
pub mod repositories;
