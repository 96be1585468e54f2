//! Unit tests for settings loading and validation.

use notecanvas::{EngineSettings, Point, SettingsError, Size};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_json_is_all_defaults() {
    let settings = EngineSettings::from_json("{}").unwrap();
    assert_eq!(settings, EngineSettings::default());
    assert_eq!(settings.min_note_width, 150.0);
    assert_eq!(settings.min_note_height, 100.0);
    assert_eq!(settings.default_note_size, Size::new(200.0, 150.0));
    assert_eq!(settings.default_note_position, Point::new(100.0, 100.0));
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        r#"{ "min_note_width": 0 }"#,
        r#"{ "char_width": -1 }"#,
        r#"{ "click_slop_px": -3 }"#,
        r#"{ "min_zoom": 2.0, "max_zoom": 1.0 }"#,
    ];
    for json in cases {
        assert!(
            matches!(EngineSettings::from_json(json), Err(SettingsError::Invalid(_))),
            "{json} should be rejected"
        );
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    assert!(matches!(
        EngineSettings::from_json("{ not json"),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = EngineSettings {
        max_zoom: 5.0,
        line_height: 24.0,
        ..Default::default()
    };
    settings.save(&path).unwrap();

    assert_eq!(EngineSettings::load(&path).unwrap(), settings);
}

#[test]
fn test_load_or_default_when_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert_eq!(EngineSettings::load_or_default(&path).unwrap(), EngineSettings::default());
    assert!(matches!(EngineSettings::load(&path), Err(SettingsError::Io(_))));
}

#[test]
fn test_load_or_default_still_reports_bad_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "max_zoom": -1 }"#).unwrap();

    assert!(EngineSettings::load_or_default(&path).is_err());
}

#[test]
fn test_derived_collaborators() {
    let settings = EngineSettings {
        min_note_width: 180.0,
        char_width: 7.0,
        ..Default::default()
    };
    assert_eq!(settings.size_limits().min_width, 180.0);
    assert_eq!(settings.monospace_measure().char_width, 7.0);
}
