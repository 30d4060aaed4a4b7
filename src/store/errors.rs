//! # Store Errors

use thiserror::Error;

use crate::product::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Malformed or incomplete input
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No file backs the requested id
    #[error("unable to read file: {0}.json")]
    NotFound(String),

    /// Filesystem failure on read/write/remove/walk
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// A stored file could not be encoded or decoded
    #[error("corrupt record {path}: {message}")]
    Codec { path: String, message: String },
}

impl StoreError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        StoreError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn codec(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        StoreError::Codec {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Short category name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "validation",
            StoreError::NotFound(_) => "not_found",
            StoreError::Io { .. } => "io",
            StoreError::Codec { .. } => "codec",
        }
    }
}
