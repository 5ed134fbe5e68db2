/// Structured error types for the whisperlog-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (whisperlog-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for whisperlog-core operations
#[derive(Error, Debug)]
pub enum HistoryError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Recording metadata parsing failed
    #[error("Metadata error at {context}: {source}")]
    Meta {
        context: String,
        source: serde_json::Error,
    },

    /// Invalid timestamp format
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Recordings directory not found
    #[error("Recordings directory not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for whisperlog-core operations
pub type Result<T> = std::result::Result<T, HistoryError>;

impl HistoryError {
    /// Create a metadata error with context
    pub fn meta(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Meta {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
