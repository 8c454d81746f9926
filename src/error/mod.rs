// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvError
//!                     |
//!      +--------------+---------------+
//!      v                              v
//!  not found                      refused
//!  NotBound                       AlreadyExists
//!  FileNotFound                   RenameCollision
//!                                 ProtectedDelete
//!                                 DirectoryCreate
//!                                 Io
//!
//! ConfigError  InvalidValue, NotFound
//!
//! Engine returns EnvResult<T>; CLI and config layers use anyhow::Result<T>.
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Errors raised by the env file engine.
#[derive(Debug, Error)]
pub enum EnvError {
    /// No file is bound to the editor.
    #[error("no env file is bound")]
    NotBound,

    /// The bound or referenced file does not exist.
    #[error("env file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Target file exists and overwriting was not requested.
    #[error("file already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Rename target key exists and overwriting was not requested.
    #[error("cannot rename '{from}' to '{to}': key '{to}' already exists")]
    RenameCollision { from: String, to: String },

    /// Attempt to delete the protected main env file without force.
    #[error("refusing to delete main env file {} without force", .path.display())]
    ProtectedDelete { path: PathBuf },

    /// Parent directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem operation failed.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EnvError {
    /// Build an [`EnvError::Io`] for `action` on `path`.
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error means the target file is unbound or missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotBound | Self::FileNotFound { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests;
