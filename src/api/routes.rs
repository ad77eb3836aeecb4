//! API route configuration.

use crate::api::handlers::{links_handler, shorten_handler, stats_handler, summary_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST API routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Register a short link
/// - `GET  /links`                - List all links, most recent first
/// - `GET  /stats/{code}`         - Metadata + click log for one link
/// - `GET  /stats/{code}/summary` - Traffic summary text for one link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(links_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/stats/{code}/summary", get(summary_handler))
}
