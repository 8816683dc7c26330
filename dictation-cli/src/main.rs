//! Command-line entry point for dictation scoring

use anyhow::Result;
use clap::Parser;
use dictation_cli::commands::Commands;

/// Score dictation answers against reference transcripts
#[derive(Debug, Parser)]
#[command(name = "dictation", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
