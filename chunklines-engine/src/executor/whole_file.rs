//! Whole-file execution strategy

use crate::{
    error::Result,
    executor::{ChunkObserver, ExecutionMetrics, ExecutionMode, Executor},
    sink::LineSink,
    source::Input,
};
use chunklines_core::split_whole;
use std::time::Instant;

/// Loads the entire input into memory, then splits it in one pass
///
/// Every segment is forwarded, so input ending in `\n` produces a final
/// empty line. The streaming strategy does not.
#[derive(Debug, Default, Clone, Copy)]
pub struct WholeFileExecutor;

impl Executor for WholeFileExecutor {
    fn run_observed(
        &self,
        input: Input,
        sink: &mut dyn LineSink,
        observer: &mut dyn ChunkObserver,
    ) -> Result<ExecutionMetrics> {
        let start_time = Instant::now();

        let text = input.to_text()?;
        let bytes_processed = text.len() as u64;
        observer.on_chunk(bytes_processed);
        log::debug!("loaded {bytes_processed} bytes into memory");

        let mut lines_emitted = 0;
        for line in split_whole(&text) {
            sink.accept(line)?;
            lines_emitted += 1;
        }
        sink.finish()?;

        Ok(ExecutionMetrics {
            mode_used: ExecutionMode::WholeFile,
            bytes_processed,
            chunks_processed: 1,
            lines_emitted,
            peak_pending_bytes: 0,
            processing_time: start_time.elapsed(),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::WholeFile
    }
}
