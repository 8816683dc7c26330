//! Word-level alignment and scoring of dictation answers
//!
//! A learner listens to a recorded passage and types what they hear. This
//! crate compares the typed answer with the reference transcript and grades
//! it:
//!
//! - [`align`] normalizes both texts, computes a minimal word diff, cleans
//!   it into legible spans and counts matches, deletions, insertions and
//!   substitutions;
//! - [`score`] turns those counts into a Word Error Rate, an accuracy
//!   percentage, a [`Grade`] and experience points.
//!
//! Both operations are total: any pair of strings, including empty ones,
//! produces a result.
//!
//! # Example
//!
//! ```rust
//! use dictation_core::{align, score, text::word_count, Grade};
//!
//! let reference = "The quick brown fox";
//! let alignment = align(reference, "the quick brown cat");
//! assert_eq!(alignment.substitutions(), 1);
//!
//! let result = score(&alignment, word_count(reference));
//! assert_eq!(result.accuracy_percent, 75);
//! assert_eq!(result.grade, Grade::Good);
//! assert_eq!(result.xp, 17);
//! ```

mod alignment;
mod cleanup;
mod diff;
pub mod scoring;
pub mod text;
pub mod types;

pub use alignment::{align, AlignmentResult};
pub use scoring::{score, Grade, GradeThresholds, ScoreResult, ScoringPolicy, XpRules};
pub use types::{DisplaySegment, EditKind, EditOperation, SegmentKind};

/// Align `user_input` with `reference` and score it with the default policy
pub fn score_texts(reference: &str, user_input: &str) -> (AlignmentResult, ScoreResult) {
    let alignment = align(reference, user_input);
    let result = score(&alignment, text::word_count(reference));
    (alignment, result)
}
