//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!(
            "  Use it with: chunklines process -i <FILE> --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration holding the default values
pub fn generate_template() -> String {
    let defaults = CliConfig::default();
    let mode = match defaults.processing.default_mode {
        crate::config::Mode::Stream => "stream",
        crate::config::Mode::Whole => "whole",
    };
    format!(
        r#"# chunklines configuration

[processing]
# Strategy used when --mode is not given: "stream" or "whole"
default_mode = "{mode}"

# Bytes read per chunk in stream mode, in KB
chunk_size_kb = {chunk}

[output]
# Prefix lines with [ReadStream (PROCESSING)] / [ReadFile (PROCESSING)]
line_prefix = {prefix}

# Print memory usage after each file
report_memory = {memory}
"#,
        chunk = defaults.processing.chunk_size_kb,
        prefix = defaults.output.line_prefix,
        memory = defaults.output.report_memory,
    )
}
