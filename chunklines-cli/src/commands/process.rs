//! Process command implementation

use crate::config::{CliConfig, Mode};
use crate::input::{resolve_patterns, FileReader};
use crate::logging;
use crate::output::{open_writer, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chunklines_engine::memory::{self, MemoryUsage};
use chunklines_engine::{ExecutionMode, LineProcessor};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Processing strategy; `1` and `2` are accepted for stream and whole
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Streaming read size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print memory usage after each file
    #[arg(long)]
    pub memory: bool,

    /// Print bare lines without the strategy label
    #[arg(long)]
    pub plain: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective options after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Strategy to run
    pub mode: Mode,
    /// Streaming read size in bytes
    pub chunk_size: usize,
    /// Prefix lines with the strategy label
    pub line_prefix: bool,
    /// Print memory usage after each file
    pub report_memory: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        log::info!("Starting line processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.resolve(&config);
        log::debug!("Settings: {:?}", settings);

        let mode = ExecutionMode::from(settings.mode);
        let processor = LineProcessor::builder()
            .mode(mode)
            .chunk_size(settings.chunk_size)
            .build()
            .context("Invalid processing options")?;

        let files = resolve_patterns(&self.input)?;

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = if settings.line_prefix {
            TextFormatter::labelled(writer, mode)
        } else {
            TextFormatter::new(writer)
        };
        let mut progress = ProgressReporter::new(self.quiet);

        for path in &files {
            let name = FileReader::display_name(path);
            if settings.report_memory {
                memory::reset_peak();
            }

            progress.start_file(&name, FileReader::file_size(path).ok());
            let output = processor
                .process_observed(FileReader::input(path), &mut formatter, &mut progress)
                .with_context(|| format!("Failed to process {}", path.display()))?;
            progress.file_completed(&name);

            if mode == ExecutionMode::Streaming {
                formatter.write_finished()?;
            }

            let metrics = &output.metrics;
            log::info!(
                "{}: {} lines, {} bytes, {} chunks in {:.2?}",
                name,
                metrics.lines_emitted,
                metrics.bytes_processed,
                metrics.chunks_processed,
                metrics.processing_time
            );

            if settings.report_memory {
                if !memory::is_tracking() {
                    log::warn!("heap tracking allocator is not installed; heap figures are zero");
                }
                formatter.write_memory(&MemoryUsage::capture())?;
            }
        }

        formatter.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Merge command-line flags over the loaded configuration
    pub fn resolve(&self, config: &CliConfig) -> Settings {
        let chunk_kb = self.chunk_kb.unwrap_or(config.processing.chunk_size_kb);
        Settings {
            mode: self.mode.unwrap_or(config.processing.default_mode),
            chunk_size: chunk_kb.saturating_mul(1024),
            line_prefix: !self.plain && config.output.line_prefix,
            report_memory: self.memory || config.output.report_memory,
        }
    }
}
