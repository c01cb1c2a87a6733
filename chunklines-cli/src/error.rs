//! Errors raised by the command layer itself
//!
//! Engine failures travel as [`chunklines_engine::EngineError`] inside
//! `anyhow` contexts; these cover what only the CLI can get wrong.

use std::fmt;

/// Failure detected before or after the engine runs
#[derive(Debug)]
pub enum CliError {
    /// No regular file matched any of the given patterns
    NoInputFiles(Vec<String>),
    /// A pattern is not valid glob syntax
    BadPattern {
        /// Pattern as given
        pattern: String,
        /// What glob objected to
        reason: String,
    },
    /// A config file could not be read, parsed or holds unusable values
    BadConfig(String),
    /// `compare` found files whose streamed lines differ from the whole-file split
    StrategiesDiverged {
        /// Number of diverging files
        files: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "no input files match: {}", patterns.join(", "))
            }
            CliError::BadPattern { pattern, reason } => {
                write!(f, "invalid glob pattern '{pattern}': {reason}")
            }
            CliError::BadConfig(msg) => write!(f, "bad config: {msg}"),
            CliError::StrategiesDiverged { files } => write!(
                f,
                "{files} file(s) printed different lines in streaming and whole-file mode"
            ),
        }
    }
}

impl std::error::Error for CliError {}
