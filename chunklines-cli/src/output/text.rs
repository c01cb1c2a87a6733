//! Plain text output formatter

use chunklines_engine::{memory::MemoryUsage, EngineError, ExecutionMode, LineSink};
use std::io::{self, Write};

/// Plain text formatter - prints one line per emitted line
///
/// With a label set, each line is printed as `[<label> (PROCESSING)]: <line>`.
pub struct TextFormatter<W: Write> {
    writer: W,
    label: Option<&'static str>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a formatter printing bare lines
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            label: None,
        }
    }

    /// Create a formatter that prefixes lines with the label of `mode`
    pub fn labelled(writer: W, mode: ExecutionMode) -> Self {
        Self {
            writer,
            label: Some(mode.label()),
        }
    }

    /// Print the end-of-stream marker for a labelled formatter
    pub fn write_finished(&mut self) -> io::Result<()> {
        if let Some(label) = self.label {
            writeln!(self.writer, "[{label} (FINISHED)]")?;
        }
        Ok(())
    }

    /// Print a memory usage report, one metric per line
    pub fn write_memory(&mut self, usage: &MemoryUsage) -> io::Result<()> {
        writeln!(self.writer, "{usage}")
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for TextFormatter<W> {
    fn accept(&mut self, line: &str) -> chunklines_engine::Result<()> {
        let result = match self.label {
            Some(label) => writeln!(self.writer, "[{label} (PROCESSING)]: {line}"),
            None => writeln!(self.writer, "{line}"),
        };
        result.map_err(|e| EngineError::SinkError(e.to_string()))
    }

    fn finish(&mut self) -> chunklines_engine::Result<()> {
        self.writer
            .flush()
            .map_err(|e| EngineError::SinkError(e.to_string()))
    }
}
