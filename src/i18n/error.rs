//! Bundle Loading Errors
//!
//! These never reach the screen. The resolver logs them and keeps showing
//! the last bundle that loaded.

use thiserror::Error;

use super::language::LanguageCode;

/// Errors raised while obtaining a translation bundle
#[derive(Error, Debug)]
pub enum BundleError {
    /// The source has no bundle for this language
    #[error("No bundle available for '{0}'")]
    NotFound(LanguageCode),

    /// The server answered with a non-success status
    #[error("Bundle request for '{language}' failed with status {status}")]
    Status { language: LanguageCode, status: u16 },

    /// The transport failed (connection refused, timeout, browser fetch error)
    #[error("Bundle request for '{language}' failed: {message}")]
    Transport { language: LanguageCode, message: String },

    /// The payload was not a JSON object of strings
    #[error("Malformed bundle: {0}")]
    Malformed(String),

    /// The payload was not valid JSON
    #[error("Invalid bundle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a bundle from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bundle operations
pub type BundleResult<T> = Result<T, BundleError>;
