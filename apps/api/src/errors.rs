use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// `listing` is the collection path a client should fall back to.
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        listing: &'static str,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Schema validation failed for {flow}: {reason}")]
    SchemaValidation { flow: &'static str, reason: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(listing: &'static str, message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
            listing,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound { message, listing } => {
                let body = Json(json!({
                    "error": {
                        "code": "NOT_FOUND",
                        "message": message,
                        "listing": listing
                    }
                }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Cancelled => (
                StatusCode::CONFLICT,
                "GENERATION_CANCELLED",
                "The generation request was cancelled".to_string(),
            ),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::SchemaValidation { flow, reason } => {
                tracing::error!("Schema validation failed for {flow}: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VALIDATION_ERROR",
                    "The AI response did not match the expected format".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::not_found("/api/v1/leave", "x"), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::Cancelled, StatusCode::CONFLICT),
            (AppError::Generation("x".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::SchemaValidation {
                    flow: "parse_resume",
                    reason: "x".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err: AppError = StoreError::DuplicateId("LR001".to_string()).into();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
