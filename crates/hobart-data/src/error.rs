//! Error types for fact document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a fact document.
///
/// Only loading can fail. Flattening and everything downstream of a loaded
/// document is total.
#[derive(Debug, Error)]
pub enum DataError {
    /// Content is not well-formed JSON
    #[error("Error decoding JSON: {0}")]
    Parse(String),

    /// Content is JSON but lacks the expected top-level structure
    #[error("Unexpected JSON structure: {0}")]
    Schema(String),

    /// The document file does not exist
    #[error("Fact document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Returns true if the error means the document resource is missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
