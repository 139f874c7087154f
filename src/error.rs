//! Error types for configuration assembly

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while assembling, loading, or provisioning configurations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is invalid or could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Filesystem failure while provisioning directories or writing configs
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization failure at the trainer handoff boundary
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
