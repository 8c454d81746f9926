// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use envmod::config::Config;
use envmod::editor::LockScope;
use envmod::logging::LogLevel;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    insta::assert_json_snapshot!(config, @r#"
    {
      "global": {
        "output_log_level": 2,
        "file_log_level": 5
      },
      "editor": {
        "file": ".env",
        "backup_suffix": ".bak",
        "lock_scope": "write"
      }
    }
    "#);
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 4
file_log_level = 6
log_file = "logs/envmod.log"

[editor]
file = "deploy/.env"
main_file = "deploy/.env"
backup_suffix = ".orig"
lock_scope = "operation"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::DUMP);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/envmod.log")));
    assert_eq!(config.editor.file, PathBuf::from("deploy/.env"));
    assert_eq!(config.editor.backup_suffix, ".orig");
    assert_eq!(config.editor.lock_scope, LockScope::Operation);
}

#[test]
fn config_parse_rejects_unknown_lock_scope() {
    assert!(Config::parse("[editor]\nlock_scope = \"forever\"\n").is_err());
}

#[test]
fn config_parse_rejects_suffix_with_separator() {
    let err = Config::parse("[editor]\nbackup_suffix = \"/bak\"\n").unwrap_err();
    assert!(err.to_string().contains("backup_suffix"), "{err}");
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(&base, "[editor]\nfile = \"base.env\"\nbackup_suffix = \".b\"\n").unwrap();
    std::fs::write(&local, "[editor]\nfile = \"local.env\"\n").unwrap();

    let loader = Config::builder()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(dir.path().join("absent.toml"));
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.editor.file, PathBuf::from("local.env"));
    assert_eq!(config.editor.backup_suffix, ".b");
}

#[test]
fn config_overrides_win_over_files() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .set("global.output_log_level", 3_i64)
        .unwrap()
        .set("editor.lock_scope", "operation")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.editor.lock_scope, LockScope::Operation);
}

#[test]
fn config_from_missing_file_fails() {
    let err = Config::from_file("/nonexistent/envmod.toml").unwrap_err();
    assert!(err.to_string().contains("config file not found"), "{err}");
}
