//! Utility modules shared across layers.

pub mod code_generator;
