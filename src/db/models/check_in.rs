//! Daily check-in data models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::CheckInStatus;

/// A raw answer as supplied by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub question_id: String,
    pub value: f64,
}

impl CheckInResponse {
    pub fn new(question_id: impl Into<String>, value: f64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// An answer as stored inside a check-in, with its normalized value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedResponse {
    pub question_id: String,
    pub value: f64,
    /// Clamped to [0, 1].
    pub normalized: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckIn {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub responses: Vec<RecordedResponse>,
    pub percentage: f64,
    pub resonance: f64,
    pub status: CheckInStatus,
}
