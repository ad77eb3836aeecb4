//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_custom_code;

/// Registers a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link",      // optional
///   "validity_minutes": 30         // optional; 0 = never expires
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with the new link
/// - **400 Bad Request** on invalid URL, empty target, or a custom code
///   that would shadow a system route
/// - **409 Conflict** when the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    request.validate().map_err(|e| {
        AppError::validation("Invalid shorten request", json!({ "errors": e.to_string() }))
    })?;

    // The engine accepts any code verbatim; the router's own namespace is
    // an adapter concern, so shadowed codes are refused here.
    if let Some(code) = request
        .custom_code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        validate_custom_code(code)?;
    }

    let entry = state
        .registry
        .create(
            &request.url,
            request.custom_code.as_deref(),
            request.validity_minutes,
        )
        .await?;

    let short_url = state.short_url(&entry.shortcode);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::from_entry(&entry, short_url)),
    ))
}
