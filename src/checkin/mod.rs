pub mod catalog;
pub mod commands;
pub mod history;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::models::{CheckInResponse, DailyCheckIn, RecordedResponse};
use crate::scoring::{resonance::normalized_for, score_responses, status_from_percentage, ScoringConfig};

pub use catalog::{default_questions, CheckInQuestion, QuestionCategory, QuestionKind};
pub use history::{summarize_history, CheckInSummary, Trend};

/// Score `responses` and wrap them in a new record stamped with `now`.
pub fn build_daily_check_in(
    responses: &[CheckInResponse],
    questions: &[CheckInQuestion],
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> DailyCheckIn {
    let score = score_responses(responses, questions, config);

    let recorded = responses
        .iter()
        .map(|response| RecordedResponse {
            question_id: response.question_id.clone(),
            value: response.value,
            normalized: normalized_for(response, questions),
        })
        .collect();

    DailyCheckIn {
        id: Uuid::new_v4().to_string(),
        timestamp: now,
        date: now.date_naive(),
        responses: recorded,
        percentage: score.percentage,
        resonance: score.resonance,
        status: status_from_percentage(score.percentage, &config.thresholds),
    }
}
