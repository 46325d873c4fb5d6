//! Error types for the requeue library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for requeue operations.
#[derive(Debug, Error)]
pub enum RequeueError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RequeueError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for requeue operations.
pub type Result<T> = std::result::Result<T, RequeueError>;
