use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Boundary error taxonomy. Core components are total functions; everything
/// here originates from request validation, lookup misses, or genuinely
/// unexpected failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("domain '{0}' not found")]
    DomainNotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::DomainNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Internal(err) => {
                // Log the cause, surface a generic message.
                tracing::error!(error = %err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
