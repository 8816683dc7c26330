//! Learner progression: XP levels, practice streaks and badges
//!
//! Everything here is computed from data the caller already holds; nothing
//! is persisted.

pub mod badge;
pub mod cefr;
pub mod level;
pub mod streak;

pub use badge::{find_badge, unlocked_badges, Badge, BadgeCategory, Requirement, BADGES};
pub use cefr::CefrLevel;
pub use level::{LevelProgress, MAX_LEVEL, XP_THRESHOLDS};
pub use streak::{current_streak, longest_streak};

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One completed exercise in a learner's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PracticeRecord {
    /// Day the exercise was completed
    pub date: NaiveDate,
    /// Level of the exercise
    pub level: CefrLevel,
    /// Accuracy of the attempt
    pub accuracy_percent: u32,
    /// XP earned by the attempt
    pub xp: u32,
}

/// Aggregate learner figures that badges are checked against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnerStats {
    /// Longest run of consecutive practice days
    pub longest_streak: u32,
    /// Best accuracy of any attempt
    pub best_accuracy: u32,
    /// Completed exercises
    pub exercises_completed: u32,
    /// Completed exercises per CEFR level
    pub exercises_by_level: BTreeMap<CefrLevel, u32>,
    /// Lifetime XP
    pub total_xp: u32,
}

impl LearnerStats {
    /// Aggregate a practice history
    pub fn from_records(records: &[PracticeRecord]) -> Self {
        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        let mut stats = Self {
            longest_streak: longest_streak(&dates),
            ..Self::default()
        };

        for record in records {
            stats.best_accuracy = stats.best_accuracy.max(record.accuracy_percent);
            stats.exercises_completed += 1;
            stats.total_xp = stats.total_xp.saturating_add(record.xp);
            *stats.exercises_by_level.entry(record.level).or_insert(0) += 1;
        }

        stats
    }

    /// Completed exercises at `level`
    pub fn completed_at(&self, level: CefrLevel) -> u32 {
        self.exercises_by_level.get(&level).copied().unwrap_or(0)
    }

    /// Level ladder position for the lifetime XP
    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::from_total_xp(self.total_xp)
    }

    /// Badges these figures unlock
    pub fn unlocked_badges(&self) -> Vec<&'static Badge> {
        unlocked_badges(self)
    }
}
