// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, open_log_file};
use std::path::{Path, PathBuf};

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=7)
        .map(|level| LogLevel::from_u8(level).map(LogLevel::to_filter_string))
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        Some(
            "off",
        ),
        Some(
            "error",
        ),
        Some(
            "warn",
        ),
        Some(
            "info",
        ),
        Some(
            "debug",
        ),
        Some(
            "trace",
        ),
        Some(
            "trace",
        ),
        None,
    ]
    "#);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::try_from(7).is_err());
    assert_eq!(u8::from(LogLevel::DEBUG), 4);
    assert_eq!(LogLevel::default(), LogLevel::WARN);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());

    let custom = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .maybe_with_log_file(Some(PathBuf::from("logs/envmod.log")))
        .build();
    assert_eq!(custom.console_level(), LogLevel::SILENT);
    assert_eq!(custom.log_file(), Some(Path::new("logs/envmod.log")));
}

#[test]
fn test_log_level_error_message() {
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': expected 0-6, got 9"
    );
}

#[test]
fn test_open_log_file_creates_parent_and_appends() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("envmod.log");

    writeln!(open_log_file(&path).unwrap(), "first").unwrap();
    writeln!(open_log_file(&path).unwrap(), "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}
