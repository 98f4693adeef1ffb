//! Error types for nota-core

use thiserror::Error;

/// Result type alias using nota-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nota-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid gateway configuration (endpoint, timeout)
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfiguration(String),

    /// HTTP transport error
    #[error("Gateway HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the remote API
    #[error("Gateway API error: {0}")]
    Api(String),

    /// Local validation failure, no request was issued
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Note not found in the loaded collection
    #[error("Note not found: {0}")]
    NotFound(i64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
