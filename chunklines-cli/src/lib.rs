//! chunklines CLI library
//!
//! This library provides the command-line interface that prints a file's
//! lines using either the streaming or the whole-file strategy, and reports
//! how much memory each one needed.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::CliError;
