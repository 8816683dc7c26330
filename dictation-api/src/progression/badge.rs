//! Achievement badges

use super::cefr::CefrLevel;
use super::LearnerStats;

/// Badge family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum BadgeCategory {
    /// Consecutive practice days
    Streak,
    /// Best single-attempt accuracy
    Accuracy,
    /// Total completed exercises
    Exercise,
    /// Completed exercises at one CEFR level
    Level,
}

impl BadgeCategory {
    /// Icon name used by the badge grid
    pub fn icon(&self) -> &'static str {
        match self {
            BadgeCategory::Streak => "flame",
            BadgeCategory::Accuracy => "star",
            BadgeCategory::Exercise => "book-open",
            BadgeCategory::Level => "award",
        }
    }
}

/// What a learner must achieve to unlock a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Requirement {
    /// Longest streak of at least `days`
    Streak { days: u32 },
    /// Best accuracy of at least `percent`
    Accuracy { percent: u32 },
    /// At least `count` completed exercises
    Exercises { count: u32 },
    /// At least `count` completed exercises at `level`
    LevelExercises { level: CefrLevel, count: u32 },
}

impl Requirement {
    /// Family of badges this requirement belongs to
    pub fn category(&self) -> BadgeCategory {
        match self {
            Requirement::Streak { .. } => BadgeCategory::Streak,
            Requirement::Accuracy { .. } => BadgeCategory::Accuracy,
            Requirement::Exercises { .. } => BadgeCategory::Exercise,
            Requirement::LevelExercises { .. } => BadgeCategory::Level,
        }
    }

    /// Short human-readable form, e.g. `"7 consecutive days"`
    pub fn text(&self) -> String {
        match self {
            Requirement::Streak { days } => format!("{days} consecutive days"),
            Requirement::Accuracy { percent } => format!("{percent}% accuracy"),
            Requirement::Exercises { count } => format!("{count} exercises"),
            Requirement::LevelExercises { level, count } => format!("{count} {level} exercises"),
        }
    }

    /// Whether `stats` satisfy this requirement
    pub fn is_met(&self, stats: &LearnerStats) -> bool {
        match *self {
            Requirement::Streak { days } => stats.longest_streak >= days,
            Requirement::Accuracy { percent } => stats.best_accuracy >= percent,
            Requirement::Exercises { count } => stats.exercises_completed >= count,
            Requirement::LevelExercises { level, count } => stats.completed_at(level) >= count,
        }
    }
}

/// An unlockable badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Badge {
    /// Stable identifier, e.g. `"streak-7"`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Unlock condition
    pub requirement: Requirement,
}

impl Badge {
    /// Family of this badge
    pub fn category(&self) -> BadgeCategory {
        self.requirement.category()
    }

    /// Icon name of this badge
    pub fn icon(&self) -> &'static str {
        self.category().icon()
    }

    /// Whether `stats` unlock this badge
    pub fn is_unlocked(&self, stats: &LearnerStats) -> bool {
        self.requirement.is_met(stats)
    }
}

const fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    requirement: Requirement,
) -> Badge {
    Badge {
        id,
        name,
        description,
        requirement,
    }
}

const fn level_badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    level: CefrLevel,
) -> Badge {
    badge(
        id,
        name,
        description,
        Requirement::LevelExercises { level, count: 10 },
    )
}

/// Every badge a learner can earn
#[rustfmt::skip]
pub static BADGES: [Badge; 18] = [
    badge("streak-3", "3-Day Streak", "Practice for 3 consecutive days", Requirement::Streak { days: 3 }),
    badge("streak-7", "Week Warrior", "Practice for 7 consecutive days", Requirement::Streak { days: 7 }),
    badge("streak-30", "Monthly Master", "Practice for 30 consecutive days", Requirement::Streak { days: 30 }),
    badge("streak-100", "Century Champion", "Practice for 100 consecutive days", Requirement::Streak { days: 100 }),
    badge("accuracy-80", "Precise Listener", "Achieve 80% accuracy in an exercise", Requirement::Accuracy { percent: 80 }),
    badge("accuracy-90", "Sharp Ear", "Achieve 90% accuracy in an exercise", Requirement::Accuracy { percent: 90 }),
    badge("accuracy-95", "Near Perfect", "Achieve 95% accuracy in an exercise", Requirement::Accuracy { percent: 95 }),
    badge("accuracy-100", "Flawless", "Achieve 100% accuracy in an exercise", Requirement::Accuracy { percent: 100 }),
    badge("exercises-10", "Getting Started", "Complete 10 exercises", Requirement::Exercises { count: 10 }),
    badge("exercises-50", "Dedicated Learner", "Complete 50 exercises", Requirement::Exercises { count: 50 }),
    badge("exercises-100", "Centurion", "Complete 100 exercises", Requirement::Exercises { count: 100 }),
    badge("exercises-500", "Practice Legend", "Complete 500 exercises", Requirement::Exercises { count: 500 }),
    level_badge("level-a1", "A1 Beginner", "Complete 10 A1 exercises", CefrLevel::A1),
    level_badge("level-a2", "A2 Elementary", "Complete 10 A2 exercises", CefrLevel::A2),
    level_badge("level-b1", "B1 Intermediate", "Complete 10 B1 exercises", CefrLevel::B1),
    level_badge("level-b2", "B2 Upper Intermediate", "Complete 10 B2 exercises", CefrLevel::B2),
    level_badge("level-c1", "C1 Advanced", "Complete 10 C1 exercises", CefrLevel::C1),
    level_badge("level-c2", "C2 Proficient", "Complete 10 C2 exercises", CefrLevel::C2),
];

/// Look up a badge by id
pub fn find_badge(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|badge| badge.id == id)
}

/// Badges unlocked by `stats`, in catalog order
pub fn unlocked_badges(stats: &LearnerStats) -> Vec<&'static Badge> {
    BADGES.iter().filter(|badge| badge.is_unlocked(stats)).collect()
}
