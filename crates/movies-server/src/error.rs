//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the wire-format
//! JSON error bodies: not-found responses carry `{"message": ...}`,
//! request failures carry `{"error": ...}` with either a plain message
//! or a structured field-error list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use movies_core::{CatalogError, FieldError};

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown movie id (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request surfaced as a plain message (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Validation failed with per-field detail (400).
    #[error("validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": message }),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": errors }),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound { .. } => ApiError::NotFound("Movie not found".to_string()),
            CatalogError::Invalid(errors) => ApiError::Validation(errors),
            CatalogError::Dataset(e) => ApiError::Internal(e.to_string()),
        }
    }
}
