//! Data Transfer Objects for reporting scored answers

use crate::session::Attempt;
use dictation_core::{AlignmentResult, DisplaySegment, Grade, ScoreResult};

/// Flat, serializable report of one scored answer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    /// Where the answer came from (file path or `"<answer>"`)
    pub source: String,
    /// Words in the reference transcript
    pub reference_words: usize,
    /// Words in the answer
    pub answer_words: usize,
    /// Correct words
    pub matches: usize,
    /// Omitted reference words
    pub deletions: usize,
    /// Extra answer words
    pub insertions: usize,
    /// Replaced words
    pub substitutions: usize,
    /// Word Error Rate
    pub word_error_rate: f64,
    /// Accuracy percent
    pub accuracy_percent: u32,
    /// Grade tier
    pub grade: Grade,
    /// Feedback line for the grade
    pub message: String,
    /// XP earned
    pub xp: u32,
    /// Highlighted alignment
    pub segments: Vec<DisplaySegment>,
}

impl ScoreReport {
    /// Build a report from an alignment and its score
    pub fn new(
        source: impl Into<String>,
        reference_words: usize,
        alignment: &AlignmentResult,
        score: &ScoreResult,
    ) -> Self {
        Self {
            source: source.into(),
            reference_words,
            answer_words: alignment.user_word_count(),
            matches: alignment.matches(),
            deletions: alignment.deletions(),
            insertions: alignment.insertions(),
            substitutions: alignment.substitutions(),
            word_error_rate: score.word_error_rate,
            accuracy_percent: score.accuracy_percent,
            grade: score.grade,
            message: score.grade.message().to_string(),
            xp: score.xp,
            segments: alignment.segments(),
        }
    }

    /// Build a report from a session attempt
    pub fn from_attempt(
        source: impl Into<String>,
        reference_words: usize,
        attempt: &Attempt,
    ) -> Self {
        Self::new(source, reference_words, &attempt.alignment, &attempt.score)
    }

    /// Serialize as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Totals over several scored answers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportSummary {
    /// Number of answers
    pub answers: usize,
    /// Mean accuracy percent
    pub mean_accuracy: f64,
    /// Lowest accuracy percent
    pub min_accuracy: u32,
    /// Highest accuracy percent
    pub max_accuracy: u32,
    /// XP earned across all answers
    pub total_xp: u32,
}

impl ReportSummary {
    /// Summarize `reports`; all zero when empty
    pub fn from_reports(reports: &[ScoreReport]) -> Self {
        if reports.is_empty() {
            return Self::default();
        }

        let accuracies = reports.iter().map(|r| r.accuracy_percent);
        let total: u64 = accuracies.clone().map(u64::from).sum();

        Self {
            answers: reports.len(),
            mean_accuracy: total as f64 / reports.len() as f64,
            min_accuracy: accuracies.clone().min().unwrap_or(0),
            max_accuracy: accuracies.max().unwrap_or(0),
            total_xp: reports
                .iter()
                .fold(0u32, |total, r| total.saturating_add(r.xp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictation_core::score_texts;

    fn report(reference: &str, answer: &str) -> ScoreReport {
        let (alignment, score) = score_texts(reference, answer);
        ScoreReport::new(
            "<answer>",
            dictation_core::text::word_count(reference),
            &alignment,
            &score,
        )
    }

    #[test]
    fn test_report_fields() {
        let report = report("the quick brown fox", "the quick brown cat");
        assert_eq!(report.reference_words, 4);
        assert_eq!(report.answer_words, 4);
        assert_eq!(report.matches, 3);
        assert_eq!(report.substitutions, 1);
        assert_eq!(report.grade, Grade::Good);
        assert_eq!(report.message, "Good job! Keep practicing!");
        assert_eq!(report.segments.len(), 3);
    }

    #[test]
    fn test_summary() {
        let reports = [
            report("one two three", "one three"),
            report("hello world", "hello world"),
        ];
        let summary = ReportSummary::from_reports(&reports);
        assert_eq!(summary.answers, 2);
        assert_eq!(summary.min_accuracy, 67);
        assert_eq!(summary.max_accuracy, 100);
        assert!((summary.mean_accuracy - 83.5).abs() < 1e-9);
        assert_eq!(summary.total_xp, 16 + 40);
    }

    #[test]
    fn test_summary_total_xp_saturates() {
        let mut high = report("hello world", "hello world");
        high.xp = u32::MAX - 1;
        let reports = [high.clone(), high];
        assert_eq!(ReportSummary::from_reports(&reports).total_xp, u32::MAX);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ReportSummary::from_reports(&[]), ReportSummary::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_json() {
        let json = report("hello world", "hello world extra").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grade"], "poor");
        assert_eq!(value["insertions"], 1);
        assert_eq!(value["segments"][1]["kind"], "insertion");
    }
}
