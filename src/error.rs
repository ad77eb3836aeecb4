//! Application error taxonomy and HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error, embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the registry engine and its adapters.
///
/// Expiry is deliberately not an error: resolution returns the entry
/// together with an expiry status so callers can still display the target
/// (see [`crate::application::services::Resolution`]).
#[derive(Debug, Error)]
pub enum AppError {
    /// Create was called with an empty (or whitespace-only) target.
    #[error("target must not be empty")]
    EmptyTarget,

    /// A caller-supplied custom shortcode is already registered.
    #[error("shortcode \"{code}\" is already taken")]
    CodeTaken { code: String },

    /// Random generation collided on every bounded attempt.
    #[error("could not generate a unique shortcode")]
    GenerationExhausted,

    /// No entry is registered under the requested shortcode.
    #[error("shortcode \"{code}\" not found")]
    NotFound { code: String },

    /// The backing store failed a read or write.
    ///
    /// Never swallowed: a failed write after a passed uniqueness check must
    /// not be reported as success.
    #[error("storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    /// Request-level validation failure (adapter layer).
    #[error("{message}")]
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn code_taken(code: impl Into<String>) -> Self {
        Self::CodeTaken { code: code.into() }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Converts the error into its wire representation.
    pub fn error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::EmptyTarget => ("empty_target", json!({})),
            AppError::CodeTaken { code } => ("code_taken", json!({ "code": code })),
            AppError::GenerationExhausted => (
                "generation_exhausted",
                json!({ "reason": "too many collisions" }),
            ),
            AppError::NotFound { code } => ("not_found", json!({ "code": code })),
            AppError::StorageUnavailable { reason } => {
                ("storage_unavailable", json!({ "reason": reason }))
            }
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyTarget | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeTaken { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_taken_display() {
        let err = AppError::code_taken("abc");
        assert_eq!(err.to_string(), "shortcode \"abc\" is already taken");
    }

    #[test]
    fn test_error_info_codes() {
        assert_eq!(AppError::EmptyTarget.error_info().code, "empty_target");
        assert_eq!(AppError::code_taken("x").error_info().code, "code_taken");
        assert_eq!(
            AppError::GenerationExhausted.error_info().code,
            "generation_exhausted"
        );
        assert_eq!(AppError::not_found("x").error_info().code, "not_found");
        assert_eq!(
            AppError::storage("boom").error_info().code,
            "storage_unavailable"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::EmptyTarget.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::code_taken("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::storage("down").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_not_found_details_carry_code() {
        let info = AppError::not_found("gone42").error_info();
        assert_eq!(info.details, json!({ "code": "gone42" }));
    }
}
