//! Progress reporting module

use chunklines_engine::ChunkObserver;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}";
const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner} {bytes} {msg}";

/// Progress reporter for file processing
///
/// Draws on stderr, so printed lines on stdout are unaffected. indicatif
/// hides the bar when stderr is not a terminal.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar for one file; `total_bytes` is `None` when the size is unknown
    pub fn start_file(&mut self, filename: &str, total_bytes: Option<u64>) {
        if self.quiet {
            return;
        }

        let (pb, template) = match total_bytes {
            Some(total) => (ProgressBar::new(total), BAR_TEMPLATE),
            None => (ProgressBar::new_spinner(), SPINNER_TEMPLATE),
        };
        match ProgressStyle::default_bar().template(template) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("progress template rejected: {e}"),
        }
        pb.set_message(filename.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Mark the current file as done
    pub fn file_completed(&mut self, filename: &str) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
            log::info!("Processed: {filename}");
        }
    }

    /// Whether a bar is currently shown
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

impl ChunkObserver for ProgressReporter {
    fn on_chunk(&mut self, bytes_read: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(bytes_read);
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.abandon();
        }
    }
}
