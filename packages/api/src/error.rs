// ABOUTME: API error type and its HTTP mapping
// ABOUTME: Separates validation, not-found and storage failures into stable error codes

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rtag_storage::StorageError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Carries the entity kind, e.g. "Review"
    #[error("{0} not found")]
    NotFound(String),

    #[error("Storage error")]
    Storage(#[source] StorageError),
}

/// Structured error response format for API consistency
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(kind) => ApiError::NotFound(kind),
            other => ApiError::Storage(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        }
    }

    /// Message safe to show to callers
    fn to_user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => format!("Validation failed: {}", msg),
            ApiError::NotFound(kind) => format!("{} not found", kind),
            ApiError::Storage(_) => "Data storage error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();

        match &self {
            ApiError::Storage(err) => {
                error!(
                    request_id = %request_id,
                    storage_error = %err,
                    "Storage system error"
                );
            }
            ApiError::Validation(msg) => {
                warn!(request_id = %request_id, reason = %msg, "Rejected request");
            }
            ApiError::NotFound(_) => {}
        }

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code,
                message: self.to_user_message(),
            },
            request_id,
        };

        (status_code, Json(body)).into_response()
    }
}
