use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::DailyCheckIn;

/// Size of each window compared by the trend.
const TREND_WINDOW: usize = 7;
/// Percentage points the newer window must move before the trend changes.
const TREND_DEADBAND: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSummary {
    pub total_entries: usize,
    pub average_percentage: f64,
    pub trend: Trend,
    pub last_7_days: Vec<DailyCheckIn>,
}

fn mean_percentage(entries: &[DailyCheckIn]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    Some(entries.iter().map(|c| c.percentage).sum::<f64>() / entries.len() as f64)
}

/// Compare the newest week of entries with the week before it.
/// `history` must be ordered newest first.
pub fn compute_trend(history: &[DailyCheckIn]) -> Trend {
    let recent_end = history.len().min(TREND_WINDOW);
    let older_end = history.len().min(TREND_WINDOW * 2);

    let recent = mean_percentage(&history[..recent_end]);
    let older = mean_percentage(&history[recent_end..older_end]);

    match (recent, older) {
        (Some(recent), Some(older)) => {
            let diff = recent - older;
            if diff > TREND_DEADBAND {
                Trend::Improving
            } else if diff < -TREND_DEADBAND {
                Trend::Declining
            } else {
                Trend::Stable
            }
        }
        _ => Trend::Stable,
    }
}

/// Average, trend, and the entries from the last seven days.
/// `history` must be ordered newest first.
pub fn summarize_history(history: &[DailyCheckIn], now: DateTime<Utc>) -> CheckInSummary {
    let cutoff = now - Duration::days(7);

    CheckInSummary {
        total_entries: history.len(),
        average_percentage: mean_percentage(history).unwrap_or(0.0),
        trend: compute_trend(history),
        last_7_days: history
            .iter()
            .filter(|c| c.timestamp >= cutoff)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CheckInStatus;

    fn entry(days_ago: i64, percentage: f64, now: DateTime<Utc>) -> DailyCheckIn {
        let timestamp = now - Duration::days(days_ago);
        DailyCheckIn {
            id: format!("entry-{days_ago}"),
            timestamp,
            date: timestamp.date_naive(),
            responses: Vec::new(),
            percentage,
            resonance: percentage / 100.0,
            status: CheckInStatus::Moderate,
        }
    }

    fn history(percentages: &[f64], now: DateTime<Utc>) -> Vec<DailyCheckIn> {
        percentages
            .iter()
            .enumerate()
            .map(|(i, &p)| entry(i as i64, p, now))
            .collect()
    }

    #[test]
    fn empty_history_is_zero_and_stable() {
        let summary = summarize_history(&[], Utc::now());
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.average_percentage, 0.0);
        assert_eq!(summary.trend, Trend::Stable);
        assert!(summary.last_7_days.is_empty());
    }

    #[test]
    fn one_week_of_data_is_stable() {
        let now = Utc::now();
        let entries = history(&[90.0, 10.0, 50.0], now);
        assert_eq!(compute_trend(&entries), Trend::Stable);
    }

    #[test]
    fn newer_week_above_older_week_is_improving() {
        let now = Utc::now();
        let mut percentages = vec![70.0; 7];
        percentages.extend(vec![60.0; 7]);
        assert_eq!(compute_trend(&history(&percentages, now)), Trend::Improving);
    }

    #[test]
    fn newer_week_below_older_week_is_declining() {
        let now = Utc::now();
        let mut percentages = vec![40.0; 7];
        percentages.extend(vec![60.0; 3]);
        assert_eq!(compute_trend(&history(&percentages, now)), Trend::Declining);
    }

    #[test]
    fn small_moves_stay_stable() {
        let now = Utc::now();
        let mut percentages = vec![65.0; 7];
        percentages.extend(vec![60.0; 7]);
        assert_eq!(compute_trend(&history(&percentages, now)), Trend::Stable);
    }

    #[test]
    fn entries_beyond_two_weeks_do_not_affect_trend() {
        let now = Utc::now();
        let mut percentages = vec![50.0; 14];
        percentages.extend(vec![0.0; 10]);
        assert_eq!(compute_trend(&history(&percentages, now)), Trend::Stable);
    }

    #[test]
    fn summary_averages_everything_and_windows_last_week() {
        let now = Utc::now();
        let entries = history(&[80.0, 60.0, 40.0, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], now);

        let summary = summarize_history(&entries, now);
        assert_eq!(summary.total_entries, 10);
        assert!((summary.average_percentage - 20.0).abs() < 1e-9);
        assert_eq!(summary.last_7_days.len(), 8);
        assert_eq!(summary.last_7_days[0].id, "entry-0");
    }
}
