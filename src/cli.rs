use clap::{Parser, Subcommand};
use cognitive_shield_lib::db::CheckInResponse;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cognitive-shield")]
#[command(author, version, about = "Daily check-ins with π-metric resonance scoring")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the check-in database and settings
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the check-in questions in the order they are scored
    Questions,

    /// Score answers without saving them
    Preview {
        /// Answer as <question_id>=<value>; repeat for each question
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<CheckInResponse>,
    },

    /// Record today's check-in (replaces an earlier one from today)
    Submit {
        /// Answer as <question_id>=<value>; repeat for each question
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<CheckInResponse>,
    },

    /// Show today's check-in, if any
    Today,

    /// List stored check-ins, newest first
    #[command(alias = "ls")]
    History {
        /// Only show this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Average, trend, and the last seven days
    Summary,

    /// Export the full history as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change scoring and history settings
    Settings {
        /// Percentage at or above which the status is high
        #[arg(long)]
        high: Option<f64>,

        /// Percentage at or above which the status is moderate
        #[arg(long)]
        moderate: Option<f64>,

        /// Percentage at or above which the status is low
        #[arg(long)]
        low: Option<f64>,

        /// π digits generated per answered question
        #[arg(long)]
        precision_multiplier: Option<usize>,

        /// Number of daily check-ins to keep
        #[arg(long)]
        retention: Option<usize>,
    },
}

pub fn parse_answer(raw: &str) -> Result<CheckInResponse, String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <question_id>=<value>, got '{raw}'"))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    if !value.is_finite() {
        return Err(format!("answer for '{id}' must be a finite number"));
    }

    Ok(CheckInResponse::new(id, value))
}
