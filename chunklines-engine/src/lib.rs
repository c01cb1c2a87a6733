//! Line processing strategies for chunklines
//!
//! This crate wires input sources, the incremental splitter from
//! `chunklines-core` and output sinks together. Two strategies are provided:
//! streaming in bounded chunks, and loading the whole input before splitting.
//! Memory instrumentation lives in [`memory`] and is kept apart from the
//! strategies themselves.

#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod executor;
pub mod memory;
pub mod processor;
pub mod sink;
pub mod source;

// Re-export key types
pub use config::{EngineConfig, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use decoder::Utf8ChunkDecoder;
pub use error::{EngineError, Result};
pub use executor::{ChunkObserver, ExecutionMetrics, ExecutionMode, Executor, NoopObserver};
pub use memory::{MemoryUsage, TrackingAllocator};
pub use processor::{Comparison, LineProcessor, LineProcessorBuilder, Output};
pub use sink::LineSink;
pub use source::{ChunkSource, Input, ReaderChunks};

// Re-export from core for convenience
pub use chunklines_core::{compare, split_whole, Equivalence, LineSplitter, SplitterStats};
