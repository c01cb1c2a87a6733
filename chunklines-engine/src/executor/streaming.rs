//! Streaming execution strategy

use crate::{
    config::check_chunk_size,
    error::{EngineError, Result},
    executor::{ChunkObserver, ExecutionMetrics, ExecutionMode, Executor},
    sink::LineSink,
    source::{ChunkSource, Input},
};
use chunklines_core::LineSplitter;
use std::time::Instant;

/// Streaming executor for memory-efficient processing
///
/// Holds at most one read buffer plus the splitter's pending line in memory.
#[derive(Debug, Clone, Copy)]
pub struct StreamingExecutor {
    chunk_size: usize,
}

impl StreamingExecutor {
    /// Create a new streaming executor reading `chunk_size` bytes at a time
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Bytes requested per read
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// Drive `source` through a fresh splitter into `sink`
///
/// Lines already delivered to the sink stay delivered if the source fails
/// part way through.
pub fn process_source<S: ChunkSource + ?Sized>(
    source: &mut S,
    sink: &mut dyn LineSink,
    observer: &mut dyn ChunkObserver,
) -> Result<ExecutionMetrics> {
    let start_time = Instant::now();
    let mut splitter = LineSplitter::new();
    let mut sink_error = None;

    while let Some(chunk) = source.next_chunk()? {
        splitter.feed_with(&chunk, |line| {
            if sink_error.is_none() {
                if let Err(e) = sink.accept(&line) {
                    sink_error = Some(e);
                }
            }
        });
        if let Some(e) = sink_error.take() {
            return Err(e);
        }
        observer.on_chunk(source.bytes_read());
    }

    let stats = splitter.stats();
    let mut lines_emitted = stats.lines_emitted;
    if let Some(last) = splitter.finish() {
        sink.accept(&last)?;
        lines_emitted += 1;
    }
    sink.finish()?;

    let metrics = ExecutionMetrics {
        mode_used: ExecutionMode::Streaming,
        bytes_processed: source.bytes_read(),
        chunks_processed: stats.chunks_fed,
        lines_emitted,
        peak_pending_bytes: stats.peak_pending,
        processing_time: start_time.elapsed(),
    };
    log::debug!(
        "streamed {} bytes in {} chunks, {} lines, peak pending {} bytes",
        metrics.bytes_processed,
        metrics.chunks_processed,
        metrics.lines_emitted,
        metrics.peak_pending_bytes
    );
    Ok(metrics)
}

impl Executor for StreamingExecutor {
    fn run_observed(
        &self,
        input: Input,
        sink: &mut dyn LineSink,
        observer: &mut dyn ChunkObserver,
    ) -> Result<ExecutionMetrics> {
        check_chunk_size(self.chunk_size)?;
        let mut source = input.into_chunks(self.chunk_size)?;
        process_source(&mut source, sink, observer)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Streaming
    }
}
