//! Level command implementation

use anyhow::Result;
use clap::Args;
use dictation_api::progression::LevelProgress;

/// Arguments for the level command
#[derive(Debug, Args)]
pub struct LevelArgs {
    /// Lifetime XP total
    #[arg(long, value_name = "N")]
    pub xp: u32,
}

impl LevelArgs {
    /// Execute the level command
    pub fn execute(&self) -> Result<()> {
        println!("{}", describe(&LevelProgress::from_total_xp(self.xp)));
        Ok(())
    }
}

fn describe(progress: &LevelProgress) -> String {
    if progress.is_max_level() {
        return format!(
            "Level {} (max) with {} XP",
            progress.level, progress.total_xp
        );
    }

    format!(
        "Level {} with {} XP: {:.0}% of the way to level {} ({} XP to go)",
        progress.level,
        progress.total_xp,
        progress.progress_percent.floor(),
        progress.level + 1,
        progress.xp_to_next_level()
    )
}
