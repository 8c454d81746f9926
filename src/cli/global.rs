// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -f, --file FILE       ← editor.file override
//! -c, --config FILE     ← Additional config files (can repeat)
//! --lock-scope SCOPE    ← editor.lock_scope override
//! -l, --log-level N     ← Console verbosity (0-6)
//! --file-log-level N    ← File verbosity (falls back to --log-level)
//! --log-file FILE       ← global.log_file override
//!
//! Precedence: CLI flags > ENVMOD_* > --config > envmod.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Env file to operate on (default: editor.file, usually `.env`).
    #[arg(short = 'f', long = "file", value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of `envmod.toml`, only uses --config.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Hold the file lock only while writing, or across the whole operation.
    #[arg(long = "lock-scope", value_name = "SCOPE", value_parser = ["write", "operation"], global = true)]
    pub lock_scope: Option<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides: Vec<(&'static str, config::Value)> = Vec::new();

        if let Some(ref file) = self.file {
            overrides.push(("editor.file", file.display().to_string().into()));
        }

        if let Some(ref scope) = self.lock_scope {
            overrides.push(("editor.lock_scope", scope.clone().into()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", i64::from(level).into()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string().into()));
        }

        overrides
    }
}
