//! Error types and exit codes for snapnotes
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, serialization, missing note on `view`)
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (corrupt store file, unknown note id)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - corrupt store file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}

/// Errors that can occur during snapnotes operations
#[derive(Error, Debug)]
pub enum SnapError {
    // Usage errors (exit code 2)
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data/store errors (exit code 3)
    #[error("corrupt store {path:?}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("note not found: {id}")]
    NoteNotFound { id: u64 },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SnapError {
    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SnapError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a store file that cannot be trusted
    pub fn corrupt_store(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SnapError::CorruptStore {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SnapError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        SnapError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SnapError::InvalidValue { .. } | SnapError::Unsupported { .. } => ExitCode::Usage,

            SnapError::CorruptStore { .. } | SnapError::NoteNotFound { .. } => ExitCode::Data,

            SnapError::Json(_)
            | SnapError::FailedOperationWithTarget { .. }
            | SnapError::Other(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for snapnotes operations
pub type Result<T> = std::result::Result<T, SnapError>;
