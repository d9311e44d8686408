use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeotriageError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    // Report errors
    #[error("Failed to write report {path}: {reason}")]
    ReportWrite { path: PathBuf, reason: String },

    // Mail errors
    #[error("Mail configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Mail transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Result type for geotriage operations.
pub type Result<T> = std::result::Result<T, GeotriageError>;
