/// Structural errors raised while resolving manipulation steps
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("while processing pipe[{0}]: invalid pipe name")]
    UnknownOperation(String),

    #[error(
        "while processing pipe[{name}]: the number of arguments mismatches (expected {expected}, got {actual})"
    )]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("while processing pipe[{name}]: {message}")]
    InvalidArgument { name: String, message: String },
}

impl PipelineError {
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    pub fn arity_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Name of the pipe the error refers to
    pub fn pipe_name(&self) -> &str {
        match self {
            Self::UnknownOperation(name) => name,
            Self::ArityMismatch { name, .. } => name,
            Self::InvalidArgument { name, .. } => name,
        }
    }
}

/// Result type alias for pipeline resolution
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
