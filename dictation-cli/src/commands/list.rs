//! List command implementation

use super::ListCommands;
use anyhow::Result;
use dictation_api::progression::BADGES;
use dictation_api::{Grade, ScoringConfig};

/// Print the requested listing to stdout
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Grades => list_grades(),
        ListCommands::Badges => list_badges(),
        ListCommands::Formats => list_formats(),
    }
    Ok(())
}

fn list_grades() {
    let thresholds = ScoringConfig::default().policy().grades;

    println!("Grades (default thresholds):");
    for grade in Grade::ALL {
        let minimum = match grade {
            Grade::Perfect => format!("{:>3}%", thresholds.perfect),
            Grade::Excellent => format!(">={:>2}%", thresholds.excellent),
            Grade::Good => format!(">={:>2}%", thresholds.good),
            Grade::Fair => format!(">={:>2}%", thresholds.fair),
            Grade::Poor => format!("<{:>3}%", thresholds.fair),
        };
        println!("  {:<10} {:<6} {}", grade.label(), minimum, grade.message());
    }
}

fn list_badges() {
    println!("Badges:");
    for badge in BADGES.iter() {
        println!(
            "  {:<14} {:<22} {}",
            badge.id,
            badge.name,
            badge.requirement.text()
        );
    }
}

fn list_formats() {
    println!("Available output formats:");
    println!("  text     - Inline word diff and score per answer");
    println!("  json     - JSON document with reports and summary");
    println!("  markdown - Markdown report with a metrics table per answer");
}
