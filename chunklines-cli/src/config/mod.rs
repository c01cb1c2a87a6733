//! Configuration module

use crate::error::CliError;
use chunklines_engine::{ExecutionMode, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Processing strategy as named on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Read the file in chunks and split lines incrementally
    #[value(alias = "1")]
    Stream,
    /// Read the whole file into memory, then split
    #[value(alias = "2")]
    Whole,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Stream => ExecutionMode::Streaming,
            Mode::Whole => ExecutionMode::WholeFile,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Mode used when `--mode` is not given
    pub default_mode: Mode,

    /// Streaming read size (KB)
    pub chunk_size_kb: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Stream,
            chunk_size_kb: DEFAULT_CHUNK_SIZE / 1024,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix each line with the strategy label
    pub line_prefix: bool,

    /// Print memory usage after each file
    pub report_memory: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_prefix: true,
            report_memory: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::BadConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::BadConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the engine cannot use
    pub fn validate(&self) -> Result<(), CliError> {
        if self.processing.chunk_size_kb == 0 {
            return Err(CliError::BadConfig(
                "processing.chunk_size_kb must be greater than zero".to_string(),
            ));
        }
        let max_kb = MAX_CHUNK_SIZE / 1024;
        if self.processing.chunk_size_kb > max_kb {
            return Err(CliError::BadConfig(format!(
                "processing.chunk_size_kb must be at most {max_kb}, got {}",
                self.processing.chunk_size_kb
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.default_mode, Mode::Stream);
        assert_eq!(config.processing.chunk_size_kb, 64);
        assert!(config.output.line_prefix);
        assert!(!config.output.report_memory);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ndefault_mode = \"whole\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.default_mode, Mode::Whole);
        assert_eq!(config.processing.chunk_size_kb, 64);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_load_rejects_unknown_mode() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\ndefault_mode = \"fast\"").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("bad config:"));
    }

    #[test]
    fn test_load_rejects_zero_chunk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\nchunk_size_kb = 0").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("chunk_size_kb"));
    }

    #[test]
    fn test_load_rejects_oversized_chunk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\nchunk_size_kb = 100000000000").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("at most 65536"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/chunklines.toml")).unwrap_err();
        assert!(matches!(err, CliError::BadConfig(_)));
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(ExecutionMode::from(Mode::Stream), ExecutionMode::Streaming);
        assert_eq!(ExecutionMode::from(Mode::Whole), ExecutionMode::WholeFile);
    }
}
