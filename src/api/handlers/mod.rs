//! HTTP request handlers, thin adapters over the registry engine.

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use links::links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::{stats_handler, summary_handler};
