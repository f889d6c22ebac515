pub mod checkin;
pub mod db;
pub mod scoring;
pub mod settings;
pub mod utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checkin::{default_questions, CheckInQuestion};
use db::Database;
use log::info;
use settings::SettingsStore;

pub const DATABASE_FILE: &str = "cognitive-shield.sqlite3";
pub const SETTINGS_FILE: &str = "settings.json";

pub struct AppState {
    pub db: Database,
    pub settings: SettingsStore,
    pub questions: Vec<CheckInQuestion>,
}

impl AppState {
    /// Open (or create) the database and settings under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).with_context(|| {
            format!("failed to create data directory {}", data_dir.display())
        })?;

        let database = Database::new(data_dir.join(DATABASE_FILE))?;
        let settings = SettingsStore::new(data_dir.join(SETTINGS_FILE))?;

        info!(
            "Cognitive Shield ready (database {})",
            database.path().display()
        );

        Ok(Self {
            db: database,
            settings,
            questions: default_questions(),
        })
    }
}

/// Platform data directory, e.g. `~/.local/share/cognitive-shield`.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("cognitive-shield"))
        .context("could not determine a data directory for this platform")
}
