//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Default read size for streaming, matching the usual 64 KiB high-water mark
/// of a buffered file read stream
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Largest accepted read size; the read buffer is allocated up front
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Strategy used to process input
    pub execution_mode: ExecutionMode,
    /// Maximum bytes read per chunk in streaming mode
    pub chunk_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::streaming()
    }
}

impl EngineConfig {
    /// Create a streaming configuration
    pub fn streaming() -> Self {
        Self {
            execution_mode: ExecutionMode::Streaming,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a configuration that loads the whole input before splitting
    pub fn whole_file() -> Self {
        Self {
            execution_mode: ExecutionMode::WholeFile,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Check the configuration for unusable values
    pub fn validate(&self) -> Result<()> {
        check_chunk_size(self.chunk_size)
    }
}

/// Reject read sizes that are zero or too large to allocate as one buffer
pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(EngineError::ConfigError(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    if chunk_size > MAX_CHUNK_SIZE {
        return Err(EngineError::ConfigError(format!(
            "chunk size {chunk_size} exceeds the maximum of {MAX_CHUNK_SIZE} bytes"
        )));
    }
    Ok(())
}
