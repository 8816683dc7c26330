//! Basic usage of the dictation API

use chrono::NaiveDate;
use dictation_api::progression::{current_streak, CefrLevel, LearnerStats, PracticeRecord};
use dictation_api::{score_answer, DictationSession, ScoringConfig, SegmentKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: One-off scoring with the default configuration
    println!("=== Method 1: One-off Scoring ===");
    let report = score_answer(
        "<answer>",
        "The early bird catches the worm",
        "the early bird catch the worm",
        &ScoringConfig::default(),
    );
    println!(
        "{}% accuracy, grade {}, {} XP: {}",
        report.accuracy_percent, report.grade, report.xp, report.message
    );

    // Method 2: A practice session with live preview
    println!("\n=== Method 2: Practice Session ===");
    let mut session = DictationSession::new("She sells sea shells by the sea shore");
    session.start();

    if let Some(preview) = session.preview("she sells sea") {
        println!(
            "Preview: {} of {} words so far",
            preview.matches(),
            session.reference_word_count()
        );
    }

    let attempt = session.submit("she sell sea shells by the shore")?;
    let mut line = String::new();
    for segment in attempt.alignment.segments() {
        let word = segment.text.trim_start();
        if word.len() != segment.text.len() {
            line.push(' ');
        }
        match segment.kind {
            SegmentKind::Match => line.push_str(word),
            SegmentKind::Deletion => line.push_str(&format!("[-{word}-]")),
            SegmentKind::Insertion => line.push_str(&format!("{{+{word}+}}")),
        }
    }
    println!("Diff: {line}");
    println!("Score: {}% ({})", attempt.score.accuracy_percent, attempt.score.grade);

    // Method 3: Progression from a practice history
    println!("\n=== Method 3: Progression ===");
    let history = [
        PracticeRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("bad date")?,
            level: CefrLevel::A2,
            accuracy_percent: 83,
            xp: 18,
        },
        PracticeRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 2).ok_or("bad date")?,
            level: CefrLevel::A2,
            accuracy_percent: 100,
            xp: 40,
        },
    ];
    let stats = LearnerStats::from_records(&history);
    let today = NaiveDate::from_ymd_opt(2024, 6, 2).ok_or("bad date")?;
    let dates: Vec<_> = history.iter().map(|r| r.date).collect();

    println!("Current streak: {} days", current_streak(&dates, today));
    let progress = stats.level_progress();
    println!(
        "Level {} ({:.0}% to next)",
        progress.level, progress.progress_percent
    );
    for badge in stats.unlocked_badges() {
        println!("Unlocked: {} ({})", badge.name, badge.requirement.text());
    }

    Ok(())
}
