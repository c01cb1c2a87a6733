//! Streaming line splitter with a bounded pending buffer

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::NEWLINE;

/// Counters describing what a [`LineSplitter`] has seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitterStats {
    /// Total bytes passed to `feed`
    pub bytes_fed: usize,
    /// Number of `feed` calls
    pub chunks_fed: usize,
    /// Lines handed out by `feed` (the final line from `finish` is not counted)
    pub lines_emitted: usize,
    /// Largest size the pending buffer reached, in bytes
    pub peak_pending: usize,
}

/// Incremental line splitter
///
/// Consumes text chunks of any size and alignment and emits complete lines as
/// soon as their terminating `\n` arrives. Text after the last newline is held
/// in a pending buffer until more input or end of input completes it.
///
/// After every `feed`, the pending buffer holds exactly the suffix of all input
/// so far that follows the last newline, or the whole input if no newline has
/// been seen yet.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: String,
    stats: SplitterStats,
}

impl LineSplitter {
    /// Create an empty splitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return the lines it completed, in order
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.feed_with(chunk, |line| lines.push(line));
        lines
    }

    /// Feed one chunk, handing each completed line to `emit` in order
    pub fn feed_with<F>(&mut self, chunk: &str, mut emit: F)
    where
        F: FnMut(String),
    {
        self.stats.bytes_fed += chunk.len();
        self.stats.chunks_fed += 1;

        // The pending buffer never contains a newline, so only the chunk needs scanning.
        let Some(last) = chunk.rfind(NEWLINE) else {
            self.pending.push_str(chunk);
            self.observe_pending(0);
            return;
        };

        let (complete, rest) = (&chunk[..last], &chunk[last + 1..]);
        let mut segments = complete.split(NEWLINE);

        // `split` always yields at least one segment; the first closes the pending line.
        if let Some(first) = segments.next() {
            self.observe_pending(first.len());
            let mut line = core::mem::take(&mut self.pending);
            line.push_str(first);
            self.stats.lines_emitted += 1;
            emit(line);
        }
        for segment in segments {
            self.stats.lines_emitted += 1;
            emit(segment.to_owned());
        }

        self.pending.push_str(rest);
        self.observe_pending(0);
    }

    /// Signal end of input
    ///
    /// Returns the pending text as the final line if it is non-empty. Input
    /// ending in `\n` leaves an empty buffer, so no empty final line is made up.
    pub fn finish(self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending)
        }
    }

    /// Text received since the last newline
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Counters collected so far
    pub fn stats(&self) -> SplitterStats {
        self.stats
    }

    fn observe_pending(&mut self, extra: usize) {
        let size = self.pending.len() + extra;
        if size > self.stats.peak_pending {
            self.stats.peak_pending = size;
        }
    }
}
