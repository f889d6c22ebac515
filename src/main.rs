use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

mod cli;

use cli::{Cli, Commands};
use cognitive_shield_lib::{
    checkin::commands,
    default_data_dir,
    scoring::StatusThresholds,
    settings::HistorySettings,
    utils::init_logging,
    AppState,
};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let state = AppState::open(&data_dir)?;

    match cli.command {
        Commands::Questions => {
            print_json(&commands::get_questions(&state).await.map_err(|e| anyhow!(e))?)
        }
        Commands::Preview { answers } => {
            let preview = commands::preview_score(&state, answers)
                .await
                .map_err(|e| anyhow!(e))?;
            print_json(&preview)
        }
        Commands::Submit { answers } => {
            if answers.is_empty() {
                log::warn!("Submitting a check-in with no answers; it will score a neutral 50%");
            }
            let check_in = commands::submit_daily_check_in(&state, answers)
                .await
                .map_err(|e| anyhow!(e))?;
            print_json(&check_in)
        }
        Commands::Today => {
            match commands::get_today_check_in(&state)
                .await
                .map_err(|e| anyhow!(e))?
            {
                Some(check_in) => print_json(&check_in),
                None => {
                    println!("No check-in recorded today.");
                    Ok(())
                }
            }
        }
        Commands::History { limit } => {
            let history = commands::get_check_in_history(&state, limit)
                .await
                .map_err(|e| anyhow!(e))?;
            print_json(&history)
        }
        Commands::Summary => {
            let summary = commands::get_check_in_summary(&state)
                .await
                .map_err(|e| anyhow!(e))?;
            print_json(&summary)
        }
        Commands::Export { output } => {
            let json = commands::export_check_in_history(&state)
                .await
                .map_err(|e| anyhow!(e))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write export to {}", path.display()))?;
                    log::info!("Exported check-in history to {}", path.display());
                    Ok(())
                }
                None => {
                    println!("{json}");
                    Ok(())
                }
            }
        }
        Commands::Settings {
            high,
            moderate,
            low,
            precision_multiplier,
            retention,
        } => {
            let mut scoring = commands::get_scoring_settings(&state).map_err(|e| anyhow!(e))?;
            if high.is_some() || moderate.is_some() || low.is_some() || precision_multiplier.is_some() {
                scoring.thresholds = StatusThresholds {
                    high: high.unwrap_or(scoring.thresholds.high),
                    moderate: moderate.unwrap_or(scoring.thresholds.moderate),
                    low: low.unwrap_or(scoring.thresholds.low),
                };
                scoring.precision_multiplier =
                    precision_multiplier.unwrap_or(scoring.precision_multiplier);
                commands::set_scoring_settings(&state, scoring).map_err(|e| anyhow!(e))?;
            }

            if let Some(retention) = retention {
                commands::set_history_settings(&state, HistorySettings { retention })
                    .map_err(|e| anyhow!(e))?;
            }

            let history = commands::get_history_settings(&state).map_err(|e| anyhow!(e))?;
            print_json(&serde_json::json!({
                "database": state.db.path(),
                "scoring": scoring,
                "history": history,
            }))
        }
    }
}
