//! Public API for dictation practice
//!
//! Builds on `dictation-core` with what an application needs around the
//! scoring engine:
//!
//! - [`DictationSession`], the practice cycle for one exercise;
//! - [`ScoringConfig`], grade thresholds and XP rules loaded from TOML;
//! - [`progression`], XP levels, practice streaks and badges;
//! - [`ScoreReport`], a flat report of a scored answer.
//!
//! # Example
//!
//! ```rust
//! use dictation_api::{DictationSession, Grade};
//!
//! let mut session = DictationSession::new("The quick brown fox");
//! session.start();
//!
//! let attempt = session.submit("the quick brown cat").unwrap();
//! assert_eq!(attempt.score.grade, Grade::Good);
//! assert_eq!(attempt.score.xp, 17);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod progression;
pub mod session;

pub use config::ScoringConfig;
pub use dto::{ReportSummary, ScoreReport};
pub use error::{ApiError, Result};
pub use session::{Attempt, DictationSession, SessionState};

// Re-export the scoring engine
pub use dictation_core::{
    align, score, score_texts, text, AlignmentResult, DisplaySegment, EditKind, EditOperation,
    Grade, ScoreResult, ScoringPolicy, SegmentKind,
};

/// Score `answer` against `reference` under `config` and report it
pub fn score_answer(
    source: impl Into<String>,
    reference: &str,
    answer: &str,
    config: &ScoringConfig,
) -> ScoreReport {
    let reference_words = text::word_count(reference);
    let alignment = align(reference, answer);
    let score = config.policy().score(&alignment, reference_words);
    ScoreReport::new(source, reference_words, &alignment, &score)
}
