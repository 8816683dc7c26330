//! Practice session for one exercise

use crate::error::{ApiError, Result};
use dictation_core::text::word_count;
use dictation_core::{align, AlignmentResult, ScoreResult, ScoringPolicy};

/// Where a session is in the practice cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SessionState {
    /// Not started
    #[default]
    Idle,
    /// Learner is typing an answer
    Practicing,
    /// An answer was submitted and scored
    Reviewing,
}

/// A scored answer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attempt {
    /// Answer exactly as submitted
    pub answer: String,
    /// Word alignment against the reference
    pub alignment: AlignmentResult,
    /// Score of the alignment
    pub score: ScoreResult,
}

/// Dictation exercise session
///
/// Holds the reference transcript of one exercise and drives the
/// idle → practicing → reviewing cycle. The reference word count is computed
/// once when the session is created.
#[derive(Debug, Clone)]
pub struct DictationSession {
    transcript: String,
    reference_word_count: usize,
    policy: ScoringPolicy,
    state: SessionState,
    last_attempt: Option<Attempt>,
}

impl DictationSession {
    /// Create a session scored with the default policy
    pub fn new(transcript: impl Into<String>) -> Self {
        Self::with_policy(transcript, ScoringPolicy::default())
    }

    /// Create a session scored with `policy`
    pub fn with_policy(transcript: impl Into<String>, policy: ScoringPolicy) -> Self {
        let transcript = transcript.into();
        let reference_word_count = word_count(&transcript);

        Self {
            transcript,
            reference_word_count,
            policy,
            state: SessionState::Idle,
            last_attempt: None,
        }
    }

    /// Reference transcript
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Words in the reference transcript
    pub fn reference_word_count(&self) -> usize {
        self.reference_word_count
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Most recent scored attempt, cleared by `start`, `retry` and `reset`
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.last_attempt.as_ref()
    }

    /// Begin practicing, discarding any previous attempt
    pub fn start(&mut self) {
        self.state = SessionState::Practicing;
        self.last_attempt = None;
    }

    /// Practice the same exercise again
    pub fn retry(&mut self) {
        self.start();
    }

    /// Return to idle, discarding any previous attempt
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.last_attempt = None;
    }

    /// Live alignment of a partial answer.
    ///
    /// Only available while practicing and when the answer has at least one
    /// word. Callers are expected to debounce keystrokes.
    pub fn preview(&self, answer: &str) -> Option<AlignmentResult> {
        if self.state != SessionState::Practicing || answer.trim().is_empty() {
            return None;
        }
        Some(align(&self.transcript, answer))
    }

    /// Score an answer and move to review.
    ///
    /// A blank answer is rejected and leaves the session unchanged.
    pub fn submit(&mut self, answer: &str) -> Result<&Attempt> {
        if answer.trim().is_empty() {
            return Err(ApiError::EmptyAnswer);
        }

        let alignment = align(&self.transcript, answer);
        let score = self.policy.score(&alignment, self.reference_word_count);

        tracing::debug!(
            accuracy = score.accuracy_percent,
            grade = %score.grade,
            xp = score.xp,
            "submitted dictation answer"
        );

        self.state = SessionState::Reviewing;
        Ok(&*self.last_attempt.insert(Attempt {
            answer: answer.to_string(),
            alignment,
            score,
        }))
    }
}
