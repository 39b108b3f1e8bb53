//! Error types for the sort service

use thiserror::Error;

/// Result type alias for the sort service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the sort service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Request body did not decode into a batch
    #[error("Decode error: {0}")]
    Decode(String),

    /// One or more concurrent sort units failed; the batch is abandoned
    #[error("Sort unit error: {0}")]
    SortUnit(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Server lifecycle errors (bind, run)
    #[error("Server error: {0}")]
    Server(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
