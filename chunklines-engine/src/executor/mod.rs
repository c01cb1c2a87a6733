//! Execution strategies for line processing

use crate::error::Result;
use crate::sink::LineSink;
use crate::source::Input;
use std::fmt;
use std::time::Duration;

pub mod streaming;
pub mod whole_file;

// Re-export executors
pub use streaming::StreamingExecutor;
pub use whole_file::WholeFileExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Read bounded chunks and split incrementally
    Streaming,
    /// Read the entire input, then split
    WholeFile,
}

impl ExecutionMode {
    /// Label used when printing lines produced by this mode
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionMode::Streaming => "ReadStream",
            ExecutionMode::WholeFile => "ReadFile",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Streaming => write!(f, "streaming"),
            ExecutionMode::WholeFile => write!(f, "whole-file"),
        }
    }
}

/// Notified as input is consumed
pub trait ChunkObserver {
    /// Called after each chunk with the total bytes read so far
    fn on_chunk(&mut self, bytes_read: u64);
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ChunkObserver for NoopObserver {
    fn on_chunk(&mut self, _bytes_read: u64) {}
}

impl<F: FnMut(u64)> ChunkObserver for F {
    fn on_chunk(&mut self, bytes_read: u64) {
        self(bytes_read)
    }
}

/// What a single run did
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionMetrics {
    /// Strategy that produced the lines
    pub mode_used: ExecutionMode,
    /// Input bytes consumed
    pub bytes_processed: u64,
    /// Chunks consumed (1 for whole-file)
    pub chunks_processed: usize,
    /// Lines handed to the sink
    pub lines_emitted: usize,
    /// Largest pending buffer held by the splitter (0 for whole-file)
    pub peak_pending_bytes: usize,
    /// Wall time of the run
    pub processing_time: Duration,
}

impl ExecutionMetrics {
    /// Throughput in bytes per second
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.processing_time.as_secs_f64();
        if secs > 0.0 {
            self.bytes_processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Trait for execution strategies
pub trait Executor {
    /// Process `input`, forwarding lines to `sink` and reporting progress
    fn run_observed(
        &self,
        input: Input,
        sink: &mut dyn LineSink,
        observer: &mut dyn ChunkObserver,
    ) -> Result<ExecutionMetrics>;

    /// Process `input`, forwarding lines to `sink`
    fn run(&self, input: Input, sink: &mut dyn LineSink) -> Result<ExecutionMetrics> {
        self.run_observed(input, sink, &mut NoopObserver)
    }

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}
