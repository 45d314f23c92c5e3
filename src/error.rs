use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {}", .path.display(), .source)]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
