// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envmod using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envmod [global options] <command>
//! all | get KEY... | has KEY
//! set KEY=VALUE... [--if-missing] [--json-values]
//! rename FROM TO [--overwrite]
//! unset KEY...
//! create PATH [--overwrite] [--raw TEXT | KEY=VALUE...]
//! remove [--force]
//! backup [--suffix S] | restore BACKUP
//! merge SOURCE [--only K,..] [--except K,..]
//! options | configs | version
//! ```

pub mod file;
pub mod global;
pub mod key;


use crate::cli::file::{BackupArgs, CreateArgs, MergeArgs, RemoveArgs, RestoreArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::key::{AllArgs, GetArgs, HasArgs, RenameArgs, SetArgs, UnsetArgs};
use clap::{Parser, Subcommand};

/// Safe in-place editor for .env files.
#[derive(Debug, Parser)]
#[command(
    name = "envmod",
    author,
    version,
    about = "Safe in-place editor for .env files",
    long_about = "envmod Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads and edits KEY=VALUE files while keeping comments, blank\n\
                  lines and key order intact. Every change is written back in a\n\
                  single write under an exclusive file lock.",
    after_help = "CONFIG FILES:\n\n\
                  envmod reads `envmod.toml` from the current directory if it\n\
                  exists, then every file given with --config, then ENVMOD_*\n\
                  environment variables (e.g. ENVMOD_EDITOR__FILE). Use\n\
                  --no-default-config to skip `envmod.toml`.\n\n\
                  EXIT CODES:\n\n\
                  0 success, 1 failure (or `has` found nothing), 2 env file\n\
                  not found."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Configs,

    /// Prints every key and value.
    All(AllArgs),

    /// Prints the values of the given keys; missing keys are empty.
    Get(GetArgs),

    /// Exits with 0 if the key is assigned, 1 otherwise.
    Has(HasArgs),

    /// Sets one or more keys.
    Set(SetArgs),

    /// Renames a key, keeping its value.
    Rename(RenameArgs),

    /// Removes one or more keys.
    Unset(UnsetArgs),

    /// Creates a new env file.
    Create(CreateArgs),

    /// Deletes the env file.
    Remove(RemoveArgs),

    /// Copies the env file to a timestamped backup.
    Backup(BackupArgs),

    /// Overwrites the env file with a backup.
    Restore(RestoreArgs),

    /// Imports keys from another env file.
    Merge(MergeArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses a `KEY=VALUE` argument, splitting at the first `=`.
///
/// # Errors
///
/// Returns a message if there is no `=` or the key is empty.
pub fn parse_pair(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
