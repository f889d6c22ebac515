use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::config::StatusThresholds;

/// Status bucket derived from a check-in percentage, ordered from most to
/// least severe. Serialized with its heartbeat colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckInStatus {
    #[serde(rename = "red", alias = "critical")]
    Critical,
    #[serde(rename = "orange", alias = "low")]
    Low,
    #[serde(rename = "yellow", alias = "moderate")]
    Moderate,
    #[serde(rename = "green", alias = "high")]
    High,
}

impl CheckInStatus {
    /// Heartbeat colour; also the form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckInStatus::Critical => "red",
            CheckInStatus::Low => "orange",
            CheckInStatus::Moderate => "yellow",
            CheckInStatus::High => "green",
        }
    }

    pub fn tier(&self) -> &'static str {
        match self {
            CheckInStatus::Critical => "critical",
            CheckInStatus::Low => "low",
            CheckInStatus::Moderate => "moderate",
            CheckInStatus::High => "high",
        }
    }

    pub fn level_label(&self) -> &'static str {
        match self {
            CheckInStatus::Critical => "Critical Resonance",
            CheckInStatus::Low => "Low Resonance",
            CheckInStatus::Moderate => "Moderate Resonance",
            CheckInStatus::High => "High Resonance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckInStatus::Critical => "High residue - significant instability",
            CheckInStatus::Low => "Entropy detected - intervention recommended",
            CheckInStatus::Moderate => "Stable - minor residue detected",
            CheckInStatus::High => "Ontologically secure - aligned with Universal ROM",
        }
    }

    /// Accepts either the colour or the tier name.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "red" | "critical" => Ok(CheckInStatus::Critical),
            "orange" | "low" => Ok(CheckInStatus::Low),
            "yellow" | "moderate" => Ok(CheckInStatus::Moderate),
            "green" | "high" => Ok(CheckInStatus::High),
            other => Err(anyhow!("unknown check-in status '{other}'")),
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier())
    }
}

/// Walk the threshold ladder from the top; anything below `low` is critical.
pub fn status_from_percentage(percentage: f64, thresholds: &StatusThresholds) -> CheckInStatus {
    if percentage >= thresholds.high {
        CheckInStatus::High
    } else if percentage >= thresholds.moderate {
        CheckInStatus::Moderate
    } else if percentage >= thresholds.low {
        CheckInStatus::Low
    } else {
        CheckInStatus::Critical
    }
}

pub fn resonance_level(percentage: f64, thresholds: &StatusThresholds) -> &'static str {
    status_from_percentage(percentage, thresholds).level_label()
}

pub fn resonance_description(percentage: f64, thresholds: &StatusThresholds) -> &'static str {
    status_from_percentage(percentage, thresholds).description()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> StatusThresholds {
        StatusThresholds {
            high: 70.0,
            moderate: 50.0,
            low: 30.0,
        }
    }

    #[test]
    fn ladder_picks_highest_matching_tier() {
        let t = ladder();
        assert_eq!(status_from_percentage(75.0, &t), CheckInStatus::High);
        assert_eq!(status_from_percentage(55.0, &t), CheckInStatus::Moderate);
        assert_eq!(status_from_percentage(35.0, &t), CheckInStatus::Low);
        assert_eq!(status_from_percentage(10.0, &t), CheckInStatus::Critical);
    }

    #[test]
    fn cutoffs_are_inclusive() {
        let t = ladder();
        assert_eq!(status_from_percentage(70.0, &t), CheckInStatus::High);
        assert_eq!(status_from_percentage(50.0, &t), CheckInStatus::Moderate);
        assert_eq!(status_from_percentage(30.0, &t), CheckInStatus::Low);
        assert_eq!(status_from_percentage(29.999, &t), CheckInStatus::Critical);
    }

    #[test]
    fn nan_falls_through_to_critical() {
        assert_eq!(status_from_percentage(f64::NAN, &ladder()), CheckInStatus::Critical);
    }

    #[test]
    fn tiers_are_ordered_by_severity() {
        assert!(CheckInStatus::Critical < CheckInStatus::Low);
        assert!(CheckInStatus::Low < CheckInStatus::Moderate);
        assert!(CheckInStatus::Moderate < CheckInStatus::High);
    }

    #[test]
    fn labels_follow_the_default_ladder() {
        let t = StatusThresholds::default();
        assert_eq!(resonance_level(85.0, &t), "High Resonance");
        assert_eq!(resonance_level(45.0, &t), "Low Resonance");
        assert_eq!(
            resonance_description(65.0, &t),
            "Stable - minor residue detected"
        );
    }

    #[test]
    fn serializes_as_heartbeat_colour() {
        assert_eq!(serde_json::to_string(&CheckInStatus::High).unwrap(), "\"green\"");
        let parsed: CheckInStatus = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, CheckInStatus::Critical);
        assert_eq!(CheckInStatus::parse("orange").unwrap(), CheckInStatus::Low);
        assert!(CheckInStatus::parse("purple").is_err());
    }
}
