use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    checkin::{build_daily_check_in, summarize_history, CheckInQuestion, CheckInSummary},
    db::models::{CheckInResponse, DailyCheckIn},
    scoring::{score_responses, status_from_percentage, CheckInStatus, ScoringConfig},
    settings::HistorySettings,
    AppState,
};

const ENABLE_LOGS: bool = true;

/// Score breakdown shown before a check-in is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePreview {
    pub percentage: f64,
    pub resonance: f64,
    pub status: CheckInStatus,
    pub level: String,
    pub description: String,
}

pub async fn get_questions(state: &AppState) -> Result<Vec<CheckInQuestion>, String> {
    Ok(state.questions.clone())
}

pub async fn preview_score(
    state: &AppState,
    responses: Vec<CheckInResponse>,
) -> Result<ScorePreview, String> {
    let config = state.settings.scoring();
    let score = score_responses(&responses, &state.questions, &config);
    let status = status_from_percentage(score.percentage, &config.thresholds);

    Ok(ScorePreview {
        percentage: score.percentage,
        resonance: score.resonance,
        status,
        level: status.level_label().to_string(),
        description: status.description().to_string(),
    })
}

pub async fn submit_daily_check_in(
    state: &AppState,
    responses: Vec<CheckInResponse>,
) -> Result<DailyCheckIn, String> {
    let config = state.settings.scoring();
    let retention = state.settings.history().retention;

    let check_in = build_daily_check_in(&responses, &state.questions, &config, Utc::now());

    state
        .db
        .save_daily_check_in(&check_in, retention)
        .await
        .map_err(|e| {
            crate::log_error!("Failed to save check-in for {}: {e:#}", check_in.date);
            e.to_string()
        })?;

    let stored = state.db.count_check_ins().await.map_err(|e| e.to_string())?;
    crate::log_info!(
        "Recorded check-in {} for {}: {:.1}% ({}); {} day(s) on record",
        check_in.id,
        check_in.date,
        check_in.percentage,
        check_in.status,
        stored
    );

    Ok(check_in)
}

pub async fn get_today_check_in(state: &AppState) -> Result<Option<DailyCheckIn>, String> {
    let today = Utc::now().date_naive();
    state
        .db
        .get_check_in_for_date(today)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_check_in_history(
    state: &AppState,
    limit: Option<usize>,
) -> Result<Vec<DailyCheckIn>, String> {
    state
        .db
        .list_check_ins(limit)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_check_in_summary(state: &AppState) -> Result<CheckInSummary, String> {
    let history = state
        .db
        .list_check_ins(None)
        .await
        .map_err(|e| e.to_string())?;
    Ok(summarize_history(&history, Utc::now()))
}

/// Pretty-printed JSON array of every stored check-in, newest first.
pub async fn export_check_in_history(state: &AppState) -> Result<String, String> {
    let history = state
        .db
        .list_check_ins(None)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&history).map_err(|e| e.to_string())
}

pub fn get_scoring_settings(state: &AppState) -> Result<ScoringConfig, String> {
    Ok(state.settings.scoring())
}

pub fn set_scoring_settings(state: &AppState, config: ScoringConfig) -> Result<(), String> {
    state
        .settings
        .update_scoring(config)
        .map_err(|e| e.to_string())
}

pub fn get_history_settings(state: &AppState) -> Result<HistorySettings, String> {
    Ok(state.settings.history())
}

pub fn set_history_settings(state: &AppState, settings: HistorySettings) -> Result<(), String> {
    state
        .settings
        .update_history(settings)
        .map_err(|e| e.to_string())
}
