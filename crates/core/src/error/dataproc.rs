/// Unified error type for dataproc
use super::{LinkError, PipelineError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataProcError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    // Missing files, wrong file kinds, refused directory creation
    #[error("Path error: {0}")]
    Path(String),

    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    // Errors from externally registered pipes
    #[error("Error: {0}")]
    Boxed(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias using DataProcError
pub type Result<T> = std::result::Result<T, DataProcError>;

impl DataProcError {
    /// Create a path error
    pub fn path(msg: impl Into<String>) -> Self {
        Self::Path(msg.into())
    }

    /// Create a directory read error
    pub fn read_dir(path: &Path, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<String> for DataProcError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for DataProcError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}
