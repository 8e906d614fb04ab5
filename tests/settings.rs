//! Integration tests for the saved configuration snapshot.

use scoreboard_web::{ConfigStore, GameConfig, SettingsError};
use std::path::PathBuf;

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("scoreboard_config_{}.json", uuid::Uuid::new_v4()))
}

#[test]
fn missing_file_yields_defaults() {
    let store = ConfigStore::new(temp_path());
    assert!(store.try_load().unwrap().is_none());
    assert_eq!(store.load(), GameConfig::default());
}

#[test]
fn save_then_load_restores_config() {
    let path = temp_path();
    let store = ConfigStore::new(&path);
    let config = GameConfig {
        win_score: 11,
        max_score: 20,
        min_diff: 2,
        win_rounds: 5,
        score_step: 1,
    };
    store.save(&config).unwrap();
    assert_eq!(store.load(), config);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"winScore\": 11"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn partial_file_merges_over_defaults() {
    let path = temp_path();
    std::fs::write(&path, r#"{"winScore": 15, "winRounds": 1}"#).unwrap();
    let config = ConfigStore::new(&path).load();
    assert_eq!(config.win_score, 15);
    assert_eq!(config.win_rounds, 1);
    assert_eq!(config.max_score, 30);
    assert_eq!(config.min_diff, 2);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let path = temp_path();
    std::fs::write(&path, "not json").unwrap();
    let store = ConfigStore::new(&path);
    assert!(matches!(store.try_load(), Err(SettingsError::Json(_))));
    assert_eq!(store.load(), GameConfig::default());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn invalid_saved_values_fall_back_to_defaults() {
    let path = temp_path();
    std::fs::write(&path, r#"{"winRounds": 2}"#).unwrap();
    assert_eq!(ConfigStore::new(&path).load(), GameConfig::default());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn config_values_require_every_field() {
    let partial = serde_json::from_str::<GameConfig>(r#"{"winScore": 15}"#);
    assert!(partial.is_err());
    let full: GameConfig = serde_json::from_str(
        r#"{"winScore": 15, "maxScore": 20, "minDiff": 2, "winRounds": 3, "scoreStep": 1}"#,
    )
    .unwrap();
    assert_eq!(full.win_score, 15);
}

#[test]
fn io_error_keeps_its_source() {
    use std::error::Error;
    // A directory cannot be read as a file.
    let store = ConfigStore::new(std::env::temp_dir());
    let err = store.try_load().unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("Settings file error"));
}
