//! Handler for short URL redirect.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::domain::classifier::ClickContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the shortcode (pure read)
/// 2. On an active entry, record the click and only then redirect — the
///    click must be persisted before the redirect escapes the process
/// 3. Return 307 Temporary Redirect to the target
///
/// # Responses
///
/// - **307** to the target for an active code
/// - **410 Gone** for an expired code; the body still carries the original
///   target so callers can show what it would have pointed to
/// - **404 Not Found** for an unknown code
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let resolution = state.registry.resolve(&code).await?;

    if !resolution.is_active() {
        let body = json!({
            "error": {
                "code": "expired",
                "message": format!("shortcode \"{}\" has expired", code),
                "details": {
                    "target": resolution.entry.target,
                    "expired_at": resolution.entry.expires_at,
                }
            }
        });

        return Ok((StatusCode::GONE, Json(body)).into_response());
    }

    let ctx = click_context_from_headers(&headers);
    state.registry.record_click(&code, ctx).await?;

    Ok(Redirect::temporary(&resolution.entry.target).into_response())
}

/// Extracts classification context from request headers.
///
/// The client ip, when present, comes from `X-Forwarded-For`; without a
/// proxy in front the field is simply absent.
fn click_context_from_headers(headers: &HeaderMap) -> ClickContext {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    ClickContext {
        user_agent: header_str(header::USER_AGENT),
        referer: header_str(header::REFERER),
        ip: headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|s| s.trim().to_string()),
    }
}
