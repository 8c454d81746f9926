// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging for the `envmod` binary.
//!
//! ```text
//! [global] / --log-level --> LogConfig --> init_logging
//!   stderr  ENVMOD_LOG directive, else console_level
//!   file    appended, file_level, spans logged on close
//! LogGuard flushes the file writer on drop
//! ```

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity on the 0-6 scale used by `output_log_level`,
/// `file_log_level` and `--log-level`.
///
/// ```text
/// 0 SILENT  nothing
/// 1 ERROR   failed commands
/// 2 WARN    forced deletes of the main file (console default)
/// 3 INFO    one line per write, backup, restore, delete or merge
/// 4 DEBUG   binds, skipped renames, empty merges
/// 5 TRACE   everything (file default)
/// 6 DUMP    kept for config compatibility, filters like TRACE
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::WARN
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    const FILTERS: [&'static str; 7] = ["off", "error", "warn", "info", "debug", "trace", "trace"];

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("expected 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if (level as usize) < Self::FILTERS.len() {
            Some(Self(level))
        } else {
            None
        }
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        Self::FILTERS[self.0 as usize]
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Resolved `[global]` logging options.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::WARN)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    /// Log file, appended to; no file layer when unset.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Prefix stderr lines with the module path.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Environment variable holding an `EnvFilter` directive that overrides the
/// console level, e.g. `ENVMOD_LOG=envmod::editor=debug`.
pub const LOG_FILTER_ENV: &str = "ENVMOD_LOG";

/// Keeps the non-blocking file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

fn console_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_string()))
}

/// Open `path` for appending, creating its parent directory first.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global subscriber: stderr always, plus the log file when set.
///
/// Colours are used only when stderr is a terminal.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use envmod::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::INFO)
///     .with_log_file("logs/envmod.log".into())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(console_filter(config.console_level()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().to_filter_string()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;
