use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::scoring::ScoringConfig;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistorySettings {
    /// Maximum number of daily records kept on disk.
    pub retention: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { retention: 365 }
    }
}

impl HistorySettings {
    pub fn validate(&self) -> Result<()> {
        if self.retention == 0 {
            bail!("history retention must keep at least one check-in");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserSettings {
    scoring: ScoringConfig,
    history: HistorySettings,
}

impl UserSettings {
    fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.history.validate()
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str::<UserSettings>(&contents) {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(err) => {
                        crate::log_warn!(
                            "Settings at {} are invalid ({err}); using defaults",
                            path.display()
                        );
                        UserSettings::default()
                    }
                },
                Err(err) => {
                    crate::log_warn!(
                        "Settings at {} are unreadable ({err}); using defaults",
                        path.display()
                    );
                    UserSettings::default()
                }
            }
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.read().scoring
    }

    pub fn history(&self) -> HistorySettings {
        self.read().history.clone()
    }

    pub fn update_scoring(&self, config: ScoringConfig) -> Result<()> {
        config.validate()?;
        {
            let mut guard = self.write();
            guard.scoring = config;
            self.persist(&guard)?;
        }
        crate::log_info!("Scoring settings updated: {:?}", config);
        Ok(())
    }

    pub fn update_history(&self, settings: HistorySettings) -> Result<()> {
        settings.validate()?;
        {
            let mut guard = self.write();
            guard.history = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    #[cfg(test)]
    fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: UserSettings = serde_json::from_str(&contents)?;
        data.validate()?;
        *self.write() = data;
        Ok(())
    }
}
