//! Engine error types
//!
//! The splitter itself cannot fail; everything here comes from the input and
//! output collaborators around it, or from configuration.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input source could not be opened or read
    #[error("source unreadable: {path}: {reason}")]
    SourceUnreadable {
        /// Path or description of the source
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// I/O error while reading an already opened source
    #[error("I/O error: {0}")]
    IoError(String),

    /// Input bytes are not valid UTF-8
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Absolute byte offset of the first invalid byte
        offset: u64,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// The output sink rejected a line
    #[error("output error: {0}")]
    SinkError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
