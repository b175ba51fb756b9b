//! Error types for seedrun.

use thiserror::Error;

/// Main error type for seedrun operations.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for SeedError {
    fn from(e: reqwest::Error) -> Self {
        SeedError::Api(e.to_string())
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Serialization(e.to_string())
    }
}

/// Result type alias for seedrun operations.
pub type SeedResult<T> = Result<T, SeedError>;
