//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Entry`] - A registered shortcode and its target
//! - [`ClickEvent`] - A click recorded against an entry

pub mod click;
pub mod entry;

pub use click::ClickEvent;
pub use entry::Entry;
