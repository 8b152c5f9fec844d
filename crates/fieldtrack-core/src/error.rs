//! Error types for fieldtrack

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldtrackError {
    // Input errors
    #[error("Input file not found at {path}")]
    InputNotFound { path: PathBuf },

    #[error("Unsupported breadcrumb format '{extension}'. Supported formats: gpx, json")]
    UnsupportedFormat { extension: String },

    #[error("Invalid {format} input: {reason}")]
    InvalidInput { format: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, FieldtrackError>;
