//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` so every failure path produces the same
//! JSON body with an explicit status code:
//!
//! ```json
//! { "error": "Movie not found", "code": "NOT_FOUND" }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use movies_core::{CoreError, FieldViolation};

/// Message returned whenever a position does not address a record.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Structured error body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_FAILED").
    pub code: &'static str,
    /// Per-field violations for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No movie at the requested position (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request that never reached validation (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed request whose values violate a constraint (422).
    #[error("validation failed")]
    ValidationFailed(Vec<FieldViolation>),

    /// Route exists but not for this method (405).
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound(msg) => ApiErrorBody {
                error: msg,
                code: "NOT_FOUND",
                details: None,
            },
            ApiError::BadRequest(msg) => ApiErrorBody {
                error: msg,
                code: "BAD_REQUEST",
                details: None,
            },
            ApiError::ValidationFailed(violations) => ApiErrorBody {
                error: format!("{} validation error(s)", violations.len()),
                code: "VALIDATION_FAILED",
                details: Some(violations),
            },
            ApiError::MethodNotAllowed(msg) => ApiErrorBody {
                error: msg,
                code: "METHOD_NOT_ALLOWED",
                details: None,
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { position } => {
                tracing::debug!(position, "no movie at position");
                ApiError::NotFound(MOVIE_NOT_FOUND.to_string())
            }
            out_of_range @ CoreError::PositionOutOfRange { .. } => ApiError::ValidationFailed(
                vec![FieldViolation::new("id", out_of_range.to_string())],
            ),
            CoreError::InvalidFields(violations) => ApiError::ValidationFailed(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_fixed_message() {
        let err = ApiError::from(CoreError::NotFound { position: 20 });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::NotFound(ref m) if m == MOVIE_NOT_FOUND));
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let err = ApiError::MethodNotAllowed("PATCH is not supported on /movies/1".to_string());
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn out_of_range_position_is_a_validation_failure() {
        let err = ApiError::from(CoreError::PositionOutOfRange { raw: 0 });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        match err {
            ApiError::ValidationFailed(v) => assert_eq!(v[0].field, "id"),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }
}
