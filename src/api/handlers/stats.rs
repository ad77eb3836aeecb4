//! Handlers for per-link statistics and traffic summary.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{StatsResponse, SummaryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata and the full click log for one shortcode.
///
/// Works for expired codes too; expiry is reported, not hidden.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let resolution = state.registry.resolve(&code).await?;

    Ok(Json(StatsResponse::from_entry(
        &resolution.entry,
        !resolution.is_active(),
    )))
}

/// Returns a human-readable traffic summary for one shortcode.
///
/// The summarizer never fails: absence of data yields an explanatory
/// message rather than an error.
///
/// # Endpoint
///
/// `GET /api/stats/{code}/summary`
pub async fn summary_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let resolution = state.registry.resolve(&code).await?;

    let summary = state.summarizer.summarize(&resolution.entry.clicks).await;

    Ok(Json(SummaryResponse { code, summary }))
}
