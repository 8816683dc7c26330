//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use dictation_api::config::DEFAULT_CONFIG_TOML;
use std::fs;
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
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Scoring configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the grade thresholds and XP rules");
        println!("2. Validate your configuration:");
        println!("   dictation validate -c {}", self.output.display());
        println!("3. Use it for scoring:");
        println!(
            "   dictation score -r reference.txt -i answer.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}
