use std::{collections::HashMap, fs};

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings =
        load_settings_from(&dir.path().join("absent.toml"), env_from(&[])).expect("settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checklist.toml");
    fs::write(
        &path,
        "shuffle_seed = 9\nwindow_title = \"Groceries\"\nhighlight_ms = 250\n",
    )
    .expect("write");

    let settings = load_settings_from(&path, env_from(&[])).expect("settings");
    assert_eq!(settings.shuffle_seed, Some(9));
    assert_eq!(settings.window_title, "Groceries");
    assert_eq!(settings.highlight_ms, 250);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn env_overrides_file_and_ignores_bad_numbers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checklist.toml");
    fs::write(&path, "shuffle_seed = 9\nlog_filter = \"warn\"\n").expect("write");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("APP__SHUFFLE_SEED", "not-a-number"),
            ("RUST_LOG", "debug"),
            ("APP__LOG_FILTER", "list_core=trace"),
            ("APP__HIGHLIGHT_MS", "1200"),
        ]),
    )
    .expect("settings");

    assert_eq!(settings.shuffle_seed, Some(9));
    assert_eq!(settings.log_filter, "list_core=trace");
    assert_eq!(settings.highlight_ms, 1200);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checklist.toml");
    fs::write(&path, "shuffle_seed = \"soon\"\n").expect("write");

    let err = load_settings_from(&path, env_from(&[])).expect_err("parse error");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("checklist.toml"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checklist.toml");
    fs::write(&path, "row_count = 12\n").expect("write");

    assert!(load_settings_from(&path, env_from(&[])).is_err());
}
