//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod level;
pub mod list;
pub mod score;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score answer files against a reference transcript
    Score(score::ScoreArgs),

    /// Write a scoring configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a scoring configuration file
    Validate(validate::ValidateArgs),

    /// Show level progress for an XP total
    Level(level::LevelArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List grades with their accuracy thresholds
    Grades,

    /// List unlockable badges
    Badges,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Score(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Level(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let score_cmd = Commands::Score(score::ScoreArgs {
            reference: PathBuf::from("reference.txt"),
            input: vec!["answer.txt".to_string()],
            answer: None,
            output: None,
            format: score::OutputFormat::Text,
            config: None,
            threads: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", score_cmd);
        assert!(debug_str.contains("Score"));
        assert!(debug_str.contains("answer.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Badges,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Badges"));
    }

    #[test]
    fn test_list_commands_run() {
        for subcommand in [ListCommands::Grades, ListCommands::Badges, ListCommands::Formats] {
            assert!(list::execute(&subcommand).is_ok());
        }
    }
}
