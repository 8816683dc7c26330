//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use dictation_api::ScoringConfig;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to scoring configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating scoring configuration: {}", self.config.display());

        match ScoringConfig::from_file(&self.config) {
            Ok(config) => {
                let g = config.grades;
                let xp = config.xp;
                println!("✓ Configuration is valid!");
                println!(
                    "  Grades: perfect {}, excellent {}, good {}, fair {}",
                    g.perfect, g.excellent, g.good, g.fair
                );
                println!(
                    "  XP: base {}, per 10% {}, perfect bonus {}",
                    xp.base, xp.per_ten_percent, xp.perfect_bonus
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}
