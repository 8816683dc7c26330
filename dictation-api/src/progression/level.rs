//! XP levels

/// Total XP needed to reach each level, starting at level 0
pub const XP_THRESHOLDS: [u32; 10] = [0, 100, 250, 500, 1000, 2000, 5000, 10000, 20000, 50000];

/// Highest reachable level
pub const MAX_LEVEL: usize = XP_THRESHOLDS.len() - 1;

/// Position of a learner on the level ladder
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelProgress {
    /// Lifetime XP
    pub total_xp: u32,
    /// Current level, from 0
    pub level: usize,
    /// XP threshold of the current level
    pub current_level_xp: u32,
    /// XP threshold of the next level; the top threshold at the max level
    pub next_level_xp: u32,
    /// Progress through the current level, 0 to 100
    pub progress_percent: f64,
}

impl LevelProgress {
    /// Locate `total_xp` on the level ladder
    pub fn from_total_xp(total_xp: u32) -> Self {
        let level = XP_THRESHOLDS
            .iter()
            .rposition(|&threshold| total_xp >= threshold)
            .unwrap_or(0);

        let current_level_xp = XP_THRESHOLDS[level];
        let next_level_xp = XP_THRESHOLDS
            .get(level + 1)
            .copied()
            .unwrap_or(XP_THRESHOLDS[MAX_LEVEL]);

        let span = next_level_xp - current_level_xp;
        let progress_percent = if span == 0 {
            100.0
        } else {
            (f64::from(total_xp - current_level_xp) / f64::from(span) * 100.0).min(100.0)
        };

        Self {
            total_xp,
            level,
            current_level_xp,
            next_level_xp,
            progress_percent,
        }
    }

    /// Whether the learner reached the top level
    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// XP still missing for the next level; 0 at the top level
    pub fn xp_to_next_level(&self) -> u32 {
        if self.is_max_level() {
            0
        } else {
            self.next_level_xp - self.total_xp
        }
    }
}
