//! Compare command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::logging;
use anyhow::{Context, Result};
use chunklines_engine::{Comparison, Equivalence, LineProcessor};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Streaming read size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompareArgs {
    /// Execute the compare command
    ///
    /// Fails when any file's streamed lines genuinely diverge from the
    /// whole-file split. The trailing empty segment is reported, not failed.
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let chunk_kb = self.chunk_kb.unwrap_or(config.processing.chunk_size_kb);
        let processor = LineProcessor::builder()
            .chunk_size(chunk_kb.saturating_mul(1024))
            .build()
            .context("Invalid processing options")?;

        let files = resolve_patterns(&self.input)?;
        let mut diverged = 0;

        for path in &files {
            let comparison = processor
                .compare(FileReader::input(path))
                .with_context(|| format!("Failed to compare {}", path.display()))?;
            println!("{}", describe(path, &comparison));
            if !comparison.equivalence.is_consistent() {
                diverged += 1;
            }
        }

        if diverged > 0 {
            return Err(CliError::StrategiesDiverged { files: diverged }.into());
        }
        Ok(())
    }
}

/// One-line verdict for a file
pub fn describe(path: &Path, comparison: &Comparison) -> String {
    let note = match comparison.equivalence {
        Equivalence::TrailingEmptySegment => {
            " (whole-file mode prints one extra empty line for the final newline)"
        }
        _ => "",
    };
    format!(
        "{}: {} [streamed {} lines, whole {} lines]{}",
        path.display(),
        comparison.equivalence,
        comparison.streamed_lines,
        comparison.whole_lines,
        note
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_trailing_segment() {
        let comparison = Comparison {
            equivalence: Equivalence::TrailingEmptySegment,
            streamed_lines: 2,
            whole_lines: 3,
        };
        let text = describe(Path::new("a.txt"), &comparison);
        assert!(text.starts_with("a.txt: equivalent except for the trailing empty segment"));
        assert!(text.contains("[streamed 2 lines, whole 3 lines]"));
        assert!(text.contains("extra empty line"));
    }

    #[test]
    fn test_describe_identical() {
        let comparison = Comparison {
            equivalence: Equivalence::Identical,
            streamed_lines: 1,
            whole_lines: 1,
        };
        assert_eq!(
            describe(Path::new("b.txt"), &comparison),
            "b.txt: identical [streamed 1 lines, whole 1 lines]"
        );
    }
}
