//! Infrastructure layer: concrete implementations of domain boundaries.

pub mod persistence;
