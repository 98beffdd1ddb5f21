//! Unit tests for settings persistence.

use mazemask::error::SettingsError;
use mazemask::settings::{Settings, default_settings_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        sizes: vec![5, 10],
        default_size: 5,
        default_algorithm: "Wilson".into(),
        apply_mask: true,
        seed: Some(42),
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"apply_mask": true}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert!(loaded.apply_mask);
    assert_eq!(loaded.sizes, Settings::default().sizes);
    assert_eq!(loaded.seed, None);
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"sizes": [], "default_size": 5}"#).unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Settings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_default_path() {
    // Some on every desktop platform
    let path = default_settings_path();
    assert!(path.is_none() || path.is_some_and(|p| p.ends_with("mazemask/settings.json")));
}
