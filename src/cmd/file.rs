// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File-level command handlers.

use std::io::Write;

use super::open_editor;
use crate::cli::file::{BackupArgs, CreateArgs, MergeArgs, RemoveArgs, RestoreArgs};
use crate::config::Config;
use crate::editor::{CreateOptions, EnvEditor, FileContent};
use crate::error::Result;

/// Create a new env file. The configured file is left untouched.
///
/// # Errors
///
/// Returns an error if the file exists without `--overwrite`, or if it
/// cannot be created.
pub fn run_create_command(args: &CreateArgs, config: &Config) -> Result<()> {
    let content = match &args.raw {
        Some(raw) => FileContent::Raw(raw.clone()),
        None if args.pairs.is_empty() => FileContent::Empty,
        None => FileContent::pairs(args.pairs.iter().cloned()),
    };
    let options = CreateOptions::builder()
        .with_overwrite(args.overwrite)
        .with_bind(false)
        .build();

    EnvEditor::new()
        .with_lock_scope(config.editor.lock_scope)
        .create_file(&args.path, &content, options)?;
    Ok(())
}

/// Delete the configured file, guarding `editor.main_file`.
///
/// # Errors
///
/// Returns an error if the file is missing, protected, or cannot be removed.
pub fn run_remove_command(args: &RemoveArgs, config: &Config) -> Result<()> {
    open_editor(config)?.delete_file(args.force, config.editor.main_file.as_deref())?;
    Ok(())
}

/// Back up the configured file and print the backup path.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be copied.
pub fn run_backup_command(args: &BackupArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let suffix = args
        .suffix
        .as_deref()
        .unwrap_or(&config.editor.backup_suffix);
    let backup = open_editor(config)?.backup(suffix)?;
    writeln!(out, "{}", backup.display())?;
    Ok(())
}

/// Overwrite the configured file with a backup.
///
/// # Errors
///
/// Returns an error if either file is missing or the write fails.
pub fn run_restore_command(args: &RestoreArgs, config: &Config) -> Result<()> {
    open_editor(config)?.restore(&args.backup, false)?;
    Ok(())
}

/// Import keys from another env file.
///
/// # Errors
///
/// Returns an error if either file is missing or the write fails.
pub fn run_merge_command(args: &MergeArgs, config: &Config) -> Result<()> {
    open_editor(config)?.merge_from_path(&args.source, &args.only, &args.except)?;
    Ok(())
}
