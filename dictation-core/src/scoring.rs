//! Word Error Rate, accuracy, grade and XP
//!
//! ```text
//! wer      = (S + D + I) / N                      (1 when N == 0)
//! accuracy = max(0, round((1 - wer) * 100))
//! xp       = 10 + floor(accuracy / 10) + (20 if accuracy == 100)
//! ```
//!
//! `round` is `f64::round`, i.e. halves round away from zero. Since the
//! accuracy is clamped at zero, this never differs from rounding halves up.

use core::fmt;

use crate::alignment::AlignmentResult;

/// Qualitative grade tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Grade {
    /// 100% accuracy
    Perfect,
    /// 90% and above
    Excellent,
    /// 75% and above
    Good,
    /// 60% and above
    Fair,
    /// Below 60%
    Poor,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Grade; 5] = [
        Grade::Perfect,
        Grade::Excellent,
        Grade::Good,
        Grade::Fair,
        Grade::Poor,
    ];

    /// Lowercase name
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Perfect => "perfect",
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Poor => "poor",
        }
    }

    /// Feedback line shown to the learner
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect! Flawless transcription!",
            Grade::Excellent => "Excellent work! Almost perfect!",
            Grade::Good => "Good job! Keep practicing!",
            Grade::Fair => "Not bad! Try listening more carefully.",
            Grade::Poor => "Keep trying! Practice makes perfect.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum accuracy for each grade above `Poor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeThresholds {
    pub perfect: u32,
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            perfect: 100,
            excellent: 90,
            good: 75,
            fair: 60,
        }
    }
}

/// Experience point award rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XpRules {
    /// Awarded for every scored attempt
    pub base: u32,
    /// Awarded per full ten percent of accuracy
    pub per_ten_percent: u32,
    /// Extra award for a 100% attempt
    pub perfect_bonus: u32,
}

impl Default for XpRules {
    fn default() -> Self {
        Self {
            base: 10,
            per_ten_percent: 1,
            perfect_bonus: 20,
        }
    }
}

/// Grade thresholds and XP rules applied by the scorer
///
/// The default policy is the product's fixed scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringPolicy {
    pub grades: GradeThresholds,
    pub xp: XpRules,
}

impl ScoringPolicy {
    /// First grade, from best to worst, whose threshold `accuracy` reaches
    pub fn grade_for(&self, accuracy_percent: u32) -> Grade {
        let t = &self.grades;
        if accuracy_percent >= t.perfect {
            Grade::Perfect
        } else if accuracy_percent >= t.excellent {
            Grade::Excellent
        } else if accuracy_percent >= t.good {
            Grade::Good
        } else if accuracy_percent >= t.fair {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// XP awarded for an attempt at `accuracy_percent`, saturating at `u32::MAX`
    pub fn xp_for(&self, accuracy_percent: u32) -> u32 {
        let perfect_bonus = if accuracy_percent >= 100 {
            self.xp.perfect_bonus
        } else {
            0
        };
        self.xp
            .base
            .saturating_add((accuracy_percent / 10).saturating_mul(self.xp.per_ten_percent))
            .saturating_add(perfect_bonus)
    }

    /// Score an alignment under this policy
    pub fn score(&self, alignment: &AlignmentResult, reference_word_count: usize) -> ScoreResult {
        let word_error_rate = word_error_rate(alignment.error_count(), reference_word_count);
        let accuracy_percent = accuracy_percent(word_error_rate);

        ScoreResult {
            word_error_rate,
            accuracy_percent,
            grade: self.grade_for(accuracy_percent),
            xp: self.xp_for(accuracy_percent),
        }
    }
}

/// Outcome of scoring one attempt
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Word Error Rate; may exceed 1 when the answer adds many words
    pub word_error_rate: f64,
    /// Accuracy in percent, 0 to 100
    pub accuracy_percent: u32,
    /// Grade tier
    pub grade: Grade,
    /// Experience points earned
    pub xp: u32,
}

/// `errors / reference_words`, or 1 for an empty reference
pub fn word_error_rate(errors: usize, reference_word_count: usize) -> f64 {
    if reference_word_count == 0 {
        return 1.0;
    }
    errors as f64 / reference_word_count as f64
}

/// Accuracy percentage for a word error rate, clamped at zero
pub fn accuracy_percent(word_error_rate: f64) -> u32 {
    let accuracy = ((1.0 - word_error_rate) * 100.0).round();
    if accuracy <= 0.0 {
        0
    } else {
        accuracy as u32
    }
}

/// Score an alignment with the default policy.
///
/// `reference_word_count` is the number of whitespace-delimited words in the
/// original reference text.
pub fn score(alignment: &AlignmentResult, reference_word_count: usize) -> ScoreResult {
    ScoringPolicy::default().score(alignment, reference_word_count)
}
