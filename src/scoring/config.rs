use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Percentage cutoffs for the status ladder. A score at or above a cutoff
/// lands in that tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusThresholds {
    pub high: f64,
    pub moderate: f64,
    pub low: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            moderate: 60.0,
            low: 40.0,
        }
    }
}

impl StatusThresholds {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("high", self.high),
            ("moderate", self.moderate),
            ("low", self.low),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                bail!("{name} threshold must be between 0 and 100, got {value}");
            }
        }

        if self.high < self.moderate || self.moderate < self.low {
            bail!(
                "thresholds must be descending (high {} >= moderate {} >= low {})",
                self.high,
                self.moderate,
                self.low
            );
        }

        Ok(())
    }
}

/// Configuration for resonance scoring with tunable thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub thresholds: StatusThresholds,

    /// How many π digits to generate per state element. Only the first
    /// `len(state)` digits take part in the score.
    pub precision_multiplier: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            thresholds: StatusThresholds::default(),
            precision_multiplier: 10,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.precision_multiplier == 0 {
            bail!("precision multiplier must be at least 1");
        }
        Ok(())
    }
}
