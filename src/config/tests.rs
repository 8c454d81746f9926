// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::editor::LockScope;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.editor.file, PathBuf::from(".env"));
    assert_eq!(config.editor.backup_suffix, ".bak");
    assert_eq!(config.editor.lock_scope, LockScope::Write);
    assert!(config.editor.main_file.is_none());
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
}

#[test]
fn test_parse_editor_section() {
    let config = Config::parse(
        r#"
[editor]
file = "deploy/.env"
main_file = "deploy/.env"
backup_suffix = ".orig"
lock_scope = "operation"
"#,
    )
    .unwrap();

    assert_eq!(config.editor.file, PathBuf::from("deploy/.env"));
    assert_eq!(config.editor.main_file, Some(PathBuf::from("deploy/.env")));
    assert_eq!(config.editor.backup_suffix, ".orig");
    assert_eq!(config.editor.lock_scope, LockScope::Operation);
}

#[test]
fn test_rejects_unknown_fields() {
    assert!(Config::parse("[editor]\nfiles = \".env\"\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"/x\"\n").is_err());
}

#[test]
fn test_rejects_bad_backup_suffix() {
    let empty = Config::parse("[editor]\nbackup_suffix = \"\"\n").unwrap_err();
    insta::assert_snapshot!(
        empty.to_string(),
        @"invalid value for 'backup_suffix' in section '[editor]': must not be empty"
    );

    assert!(Config::parse("[editor]\nbackup_suffix = \"/tmp/x\"\n").is_err());
}

#[test]
fn test_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_overrides_win_over_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[editor]\nfile = \"a.env\"\n")
        .set("editor.file", "b.env")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.editor.file, PathBuf::from("b.env"));
}

#[test]
fn test_missing_required_file() {
    let err = ConfigLoader::new()
        .add_toml_file("/definitely/not/here/envmod.toml")
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"config file not found: /definitely/not/here/envmod.toml"
    );
}

#[test]
fn test_format_options() {
    let config = Config::parse("[editor]\nmain_file = \".env\"\n").unwrap();
    insta::assert_debug_snapshot!(config.format_options(), @r#"
    [
        "editor.backup_suffix    = .bak",
        "editor.file             = .env",
        "editor.lock_scope       = write",
        "editor.main_file        = .env",
        "global.file_log_level   = 5",
        "global.output_log_level = 2",
    ]
    "#);
}
