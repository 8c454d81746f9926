// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envmod.
//!
//! ```text
//! [global]  output_log_level, file_log_level, log_file
//! [editor]  file, main_file, backup_suffix, lock_scope
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::editor::{DEFAULT_BACKUP_SUFFIX, LockScope};
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Env editor options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Env file edited when `--file` is not given.
    pub file: PathBuf,
    /// File that `remove` refuses to delete without `--force`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_file: Option<PathBuf>,
    /// Suffix inserted before the backup timestamp.
    pub backup_suffix: String,
    /// Lock held during writes or across whole operations.
    pub lock_scope: LockScope,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(".env"),
            main_file: None,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            lock_scope: LockScope::Write,
        }
    }
}

impl EditorConfig {
    /// Check values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `file`, or a
    /// `backup_suffix` that is empty or contains a path separator.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.file.as_os_str().is_empty() {
            return Err(invalid("file", "must not be empty"));
        }
        if self.backup_suffix.is_empty() {
            return Err(invalid("backup_suffix", "must not be empty"));
        }
        if self.backup_suffix.contains(['/', '\\']) {
            return Err(invalid(
                "backup_suffix",
                &format!("must not contain a path separator, got '{}'", self.backup_suffix),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "editor".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
