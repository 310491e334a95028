//! Error types for Chirpy
//!
//! All handler errors are converted to `AppError`, which implements
//! `IntoResponse` so every failure leaves the server as a JSON body of the
//! form `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::data::StoreError;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded (400)
    #[error("Invalid JSON")]
    InvalidJson,

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found or unaddressable (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Route exists but not for this method (405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Persistence gateway failure (500)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error (500)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl AppError {
    /// Status code and client-facing message for this error.
    ///
    /// Backend failures never echo their source; the detail goes to the log.
    fn parts(&self) -> (StatusCode, String, &'static str) {
        match self {
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, self.to_string(), "invalid_json"),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), "validation"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), "not_found"),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                self.to_string(),
                "method_not_allowed",
            ),
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_string(),
                "store",
            ),
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), "config"),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "internal",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use axum::Json;

        let (status, error_message, error_type) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, error_type, "Request failed");
        } else {
            tracing::debug!(error = %self, error_type, "Request rejected");
        }

        // Record error metric
        use crate::metrics::ERRORS_TOTAL;
        ERRORS_TOTAL.with_label_values(&[error_type]).inc();

        let body = Json(serde_json::json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
