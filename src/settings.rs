//! Last-used configuration snapshot, stored as a flat JSON file.

use crate::models::GameConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the snapshot: any missing field takes its default.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredConfig {
    win_score: u32,
    max_score: u32,
    min_diff: u32,
    win_rounds: u32,
    score_step: u32,
}

impl Default for StoredConfig {
    fn default() -> Self {
        GameConfig::default().into()
    }
}

impl From<GameConfig> for StoredConfig {
    fn from(c: GameConfig) -> Self {
        Self {
            win_score: c.win_score,
            max_score: c.max_score,
            min_diff: c.min_diff,
            win_rounds: c.win_rounds,
            score_step: c.score_step,
        }
    }
}

impl From<StoredConfig> for GameConfig {
    fn from(c: StoredConfig) -> Self {
        Self {
            win_score: c.win_score,
            max_score: c.max_score,
            min_diff: c.min_diff,
            win_rounds: c.win_rounds,
            score_step: c.score_step,
        }
    }
}

/// File-backed store for the last saved `GameConfig`.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved config. `Ok(None)` if nothing has been saved yet.
    /// Fields missing from the file take their default values.
    pub fn try_load(&self) -> Result<Option<GameConfig>, SettingsError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredConfig = serde_json::from_str(&raw)?;
        Ok(Some(stored.into()))
    }

    /// Saved config, or defaults if the file is missing, unreadable or invalid.
    pub fn load(&self) -> GameConfig {
        match self.try_load() {
            Ok(Some(config)) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    log::warn!("Ignoring saved settings in {}: {}", self.path.display(), e);
                    GameConfig::default()
                }
            },
            Ok(None) => GameConfig::default(),
            Err(e) => {
                log::warn!("Could not load {}: {}", self.path.display(), e);
                GameConfig::default()
            }
        }
    }

    /// Overwrite the stored snapshot.
    pub fn save(&self, config: &GameConfig) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
