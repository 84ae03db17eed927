//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use feeler_core::session::summarizer::SummarizeError;
use feeler_types::error::RepositoryError;
use feeler_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or empty request fields.
    Validation(String),
    /// Storage-layer failure.
    Storage(RepositoryError),
    /// Generation provider failure.
    Generation(LlmError),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Storage(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Generation(e)
    }
}

impl From<SummarizeError> for AppError {
    fn from(e: SummarizeError) -> Self {
        match e {
            SummarizeError::Storage(e) => AppError::Storage(e),
            SummarizeError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                e.to_string(),
            ),
            AppError::Generation(LlmError::RateLimited) => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Provider rate limit exceeded".to_string(),
            ),
            AppError::Generation(e) => {
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", e.to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
