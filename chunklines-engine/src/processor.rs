//! Main line processor and builder

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{
        ChunkObserver, ExecutionMetrics, ExecutionMode, Executor, NoopObserver,
        StreamingExecutor, WholeFileExecutor,
    },
    sink::LineSink,
    source::Input,
};
use chunklines_core::{compare, split_whole, Equivalence};

/// Main line processor
///
/// Entry point that picks a strategy from its [`EngineConfig`] and runs input
/// through it.
#[derive(Debug, Clone, Default)]
pub struct LineProcessor {
    config: EngineConfig,
}

/// Result of a processing run
#[derive(Debug, Clone)]
pub struct Output {
    /// Metrics of the run
    pub metrics: ExecutionMetrics,
}

/// Streaming output checked against the whole-text split of the same input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Verdict
    pub equivalence: Equivalence,
    /// Lines produced by the streaming splitter
    pub streamed_lines: usize,
    /// Lines produced by the whole-text split
    pub whole_lines: usize,
}

impl LineProcessor {
    /// Create a processor with the default (streaming) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a processor
    pub fn builder() -> LineProcessorBuilder {
        LineProcessorBuilder::new()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process input, forwarding every line to `sink`
    pub fn process(&self, input: Input, sink: &mut dyn LineSink) -> Result<Output> {
        self.process_observed(input, sink, &mut NoopObserver)
    }

    /// Process input with a progress observer
    pub fn process_observed(
        &self,
        input: Input,
        sink: &mut dyn LineSink,
        observer: &mut dyn ChunkObserver,
    ) -> Result<Output> {
        log::info!("processing {:?} in {} mode", input, self.config.execution_mode);
        let metrics = match self.config.execution_mode {
            ExecutionMode::Streaming => StreamingExecutor::new(self.config.chunk_size)
                .run_observed(input, sink, observer)?,
            ExecutionMode::WholeFile => WholeFileExecutor.run_observed(input, sink, observer)?,
        };
        Ok(Output { metrics })
    }

    /// Process input and return its lines
    pub fn collect(&self, input: Input) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.process(input, &mut lines)?;
        Ok(lines)
    }

    /// Run both strategies over the same input and compare their lines
    ///
    /// The input is read once. The streaming side still goes through the
    /// configured chunk size, so chunk boundaries fall where they would when
    /// reading the file directly.
    pub fn compare(&self, input: Input) -> Result<Comparison> {
        let text = input.to_text()?;

        let mut streamed: Vec<String> = Vec::new();
        StreamingExecutor::new(self.config.chunk_size)
            .run(Input::from_text(text.as_str()), &mut streamed)?;
        let whole: Vec<&str> = split_whole(&text).collect();

        let equivalence = compare(&streamed, &whole);
        match &equivalence {
            Equivalence::Diverged { .. } => log::warn!("strategies disagree: {equivalence}"),
            _ => log::debug!("strategies agree: {equivalence}"),
        }

        Ok(Comparison {
            equivalence,
            streamed_lines: streamed.len(),
            whole_lines: whole.len(),
        })
    }
}

/// Builder for LineProcessor
///
/// Provides a fluent interface for configuring the processor.
#[derive(Debug, Clone, Default)]
pub struct LineProcessorBuilder {
    config: EngineConfig,
}

impl LineProcessorBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the streaming read size in bytes
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Build the processor, validating the configuration
    pub fn build(self) -> Result<LineProcessor> {
        LineProcessor::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_builder_defaults() {
        let processor = LineProcessor::builder().build().unwrap();
        assert_eq!(processor.config(), &EngineConfig::streaming());
    }

    #[test]
    fn test_builder_rejects_zero_chunk() {
        let err = LineProcessor::builder().chunk_size(0).build().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_builder_rejects_oversized_chunk() {
        let err = LineProcessor::builder()
            .chunk_size(usize::MAX)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_collect_streaming_and_whole() {
        let streaming = LineProcessor::builder().chunk_size(2).build().unwrap();
        assert_eq!(
            streaming.collect(Input::from_text("a\nb\n")).unwrap(),
            vec!["a", "b"]
        );

        let whole = LineProcessor::builder()
            .mode(ExecutionMode::WholeFile)
            .build()
            .unwrap();
        assert_eq!(
            whole.collect(Input::from_text("a\nb\n")).unwrap(),
            vec!["a", "b", ""]
        );
    }

    #[test]
    fn test_compare_reports_trailing_segment() {
        let processor = LineProcessor::builder().chunk_size(3).build().unwrap();
        let comparison = processor.compare(Input::from_text("x\ny\n")).unwrap();
        assert_eq!(comparison.equivalence, Equivalence::TrailingEmptySegment);
        assert_eq!(comparison.streamed_lines, 2);
        assert_eq!(comparison.whole_lines, 3);
    }

    #[test]
    fn test_compare_identical() {
        let processor = LineProcessor::new();
        let comparison = processor.compare(Input::from_text("x\ny")).unwrap();
        assert_eq!(comparison.equivalence, Equivalence::Identical);
    }

    #[test]
    fn test_process_metrics() {
        let processor = LineProcessor::new();
        let mut lines: Vec<String> = Vec::new();
        let output = processor
            .process(Input::from_text("one\ntwo"), &mut lines)
            .unwrap();
        assert_eq!(output.metrics.lines_emitted, 2);
        assert_eq!(output.metrics.bytes_processed, 7);
    }
}
