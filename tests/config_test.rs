//! Tests for loading settings files.

use noughts::Settings;
use ratatui::style::Color;
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "o_color = \"yellow\"").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let settings = Settings::from_file(file.path()).expect("Valid settings");
    assert_eq!(*settings.o_color(), Color::Yellow);
    assert_eq!(*settings.x_color(), Color::Blue);
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let missing = dir.path().join("absent.toml");

    let err = Settings::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_bad_value_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "highlight_winning_line = \"sometimes\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_load_explicit_path() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("noughts.toml");
    std::fs::write(&path, "highlight_winning_line = false\n").unwrap();

    let settings = Settings::load(Some(Path::new(&path))).expect("Valid settings");
    assert!(!settings.highlight_winning_line());
}
