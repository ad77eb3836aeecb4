//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::links::{LinkListResponse, LinkSummary};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all registered links, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let entries = state.registry.list_entries().await?;

    let items: Vec<LinkSummary> = entries
        .iter()
        .map(|entry| LinkSummary::from_entry(entry, state.short_url(&entry.shortcode)))
        .collect();

    Ok(Json(LinkListResponse {
        total: items.len(),
        items,
    }))
}
