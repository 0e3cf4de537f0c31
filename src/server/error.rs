//! Server Error Types
//!
//! Error types for the locale server and their conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::i18n::BundleError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Unknown language or no bundle on disk
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bundle on disk does not match the wire format
    #[error("Invalid bundle: {0}")]
    InvalidBundle(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BundleError> for ServerError {
    fn from(e: BundleError) -> Self {
        match e {
            BundleError::NotFound(language) => {
                ServerError::NotFound(format!("no bundle for '{}'", language))
            }
            BundleError::Malformed(_) | BundleError::Json(_) => {
                ServerError::InvalidBundle(e.to_string())
            }
            BundleError::Io(io) => ServerError::Io(io),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::InvalidBundle(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_BUNDLE"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Server error occurred"
            );
        } else {
            tracing::debug!(request_id = %request_id, error_code = %code, "{}", self);
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
