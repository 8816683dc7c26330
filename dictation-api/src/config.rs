//! Scoring configuration
//!
//! Grade thresholds and XP rules live in a small TOML file. The default file
//! ships inside the crate and is parsed once; custom files are validated
//! before they can be used for scoring.

use crate::error::{ApiError, Result};
use dictation_core::{GradeThresholds, ScoringPolicy, XpRules};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Source of the embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../configs/scoring.toml");

static DEFAULT_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// `[grades]` table: minimum accuracy percent for each grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradesSection {
    /// Minimum accuracy for `perfect`
    pub perfect: u32,
    /// Minimum accuracy for `excellent`
    pub excellent: u32,
    /// Minimum accuracy for `good`
    pub good: u32,
    /// Minimum accuracy for `fair`
    pub fair: u32,
}

/// `[xp]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XpSection {
    /// XP for any scored attempt
    pub base: u32,
    /// XP per full ten percent of accuracy
    pub per_ten_percent: u32,
    /// Extra XP at 100% accuracy
    pub perfect_bonus: u32,
}

/// Scoring configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Grade thresholds
    pub grades: GradesSection,
    /// XP rules
    pub xp: XpSection,
}

impl ScoringConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScoringConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "loaded scoring configuration");
        Ok(config)
    }

    /// The embedded default configuration
    pub fn embedded() -> &'static ScoringConfig {
        DEFAULT_CONFIG.get_or_init(|| match Self::from_toml_str(DEFAULT_CONFIG_TOML) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("embedded scoring config is invalid: {e}");
                ScoringConfig::from(ScoringPolicy::default())
            }
        })
    }

    /// Check that grade thresholds are percentages in strictly descending order
    pub fn validate(&self) -> Result<()> {
        let g = &self.grades;

        if g.perfect > 100 {
            return Err(ApiError::Config(format!(
                "grades.perfect must be at most 100, got {}",
                g.perfect
            )));
        }

        let ordered = [
            ("perfect", g.perfect),
            ("excellent", g.excellent),
            ("good", g.good),
            ("fair", g.fair),
        ];
        for pair in ordered.windows(2) {
            let ((upper, upper_value), (lower, lower_value)) = (pair[0], pair[1]);
            if lower_value >= upper_value {
                return Err(ApiError::Config(format!(
                    "grades.{lower} ({lower_value}) must be below grades.{upper} ({upper_value})"
                )));
            }
        }

        Ok(())
    }

    /// Scoring policy described by this configuration
    pub fn policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            grades: GradeThresholds {
                perfect: self.grades.perfect,
                excellent: self.grades.excellent,
                good: self.grades.good,
                fair: self.grades.fair,
            },
            xp: XpRules {
                base: self.xp.base,
                per_ten_percent: self.xp.per_ten_percent,
                perfect_bonus: self.xp.perfect_bonus,
            },
        }
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ApiError::Config(e.to_string()))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        *Self::embedded()
    }
}

impl From<ScoringPolicy> for ScoringConfig {
    fn from(policy: ScoringPolicy) -> Self {
        Self {
            grades: GradesSection {
                perfect: policy.grades.perfect,
                excellent: policy.grades.excellent,
                good: policy.grades.good,
                fair: policy.grades.fair,
            },
            xp: XpSection {
                base: policy.xp.base,
                per_ten_percent: policy.xp.per_ten_percent,
                perfect_bonus: policy.xp.perfect_bonus,
            },
        }
    }
}
