//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod compare;
pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every line of the input files
    Process(process::ProcessArgs),

    /// Check that streaming and whole-file processing agree
    Compare(compare::CompareArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available processing modes
    Modes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by `list <subcommand>`
    pub fn render(&self) -> String {
        match self {
            ListCommands::Modes => "Available modes:\n  \
                 stream (1)  Read in bounded chunks and split lines incrementally\n  \
                 whole  (2)  Read the entire file into memory, then split\n"
                .to_string(),
        }
    }
}
