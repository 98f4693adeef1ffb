use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] nota_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Search term cannot be empty")]
    EmptySearchTerm,
    #[error(
        "No API URL configured. Pass --api-url or set NOTA_API_URL to the notes API base URL."
    )]
    ApiUrlNotConfigured,
    #[error("Configuration error: {0}")]
    Config(String),
}
