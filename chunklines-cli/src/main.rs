//! chunklines: print a file's lines by streaming it in chunks or by loading
//! it whole, and compare what each approach costs in memory

use chunklines_cli::commands::Commands;
use chunklines_engine::TrackingAllocator;
use clap::Parser;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Streaming vs. whole-file line processing
#[derive(Debug, Parser)]
#[command(name = "chunklines", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
