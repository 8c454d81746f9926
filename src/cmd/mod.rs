// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Config --> cmd::run_* handlers --> EnvEditor
//!   key:    all, get, has, set, rename, unset
//!   file:   create, remove, backup, restore, merge
//!   config: options, configs
//! ```
//!
//! Handlers write their output to the given writer so callers choose
//! between stdout and a buffer.

pub mod config;
pub mod file;
pub mod key;


use std::process::ExitCode;

use crate::config::Config;
use crate::editor::EnvEditor;
use crate::error::{EnvError, Result};

/// Exit code for a missing env file.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Open the configured env file with the configured lock scope.
///
/// # Errors
///
/// Returns [`EnvError::FileNotFound`] if `editor.file` does not exist.
pub fn open_editor(config: &Config) -> Result<EnvEditor> {
    let editor = EnvEditor::open(&config.editor.file)?;
    Ok(editor.with_lock_scope(config.editor.lock_scope))
}

/// Map a command error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let not_found = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<EnvError>())
        .any(EnvError::is_not_found);
    if not_found {
        ExitCode::from(EXIT_NOT_FOUND)
    } else {
        ExitCode::FAILURE
    }
}
