// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File-level command arguments.
//!
//! ```text
//! create PATH [-o] [--raw TEXT | KEY=VALUE...]
//! remove [--force]          main file needs --force
//! backup [--suffix S]       prints backup path
//! restore BACKUP
//! merge SOURCE [--only K,..] [--except K,..]
//! ```

use clap::Args;
use std::path::PathBuf;

use super::parse_pair;

/// Arguments for the `create` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// File to create; parent directories are created as needed.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Replace the file if it already exists.
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Raw file content, written with a trailing newline.
    #[arg(long, value_name = "TEXT", conflicts_with = "pairs")]
    pub raw: Option<String>,

    /// Initial assignments, one line per pair.
    #[arg(value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoveArgs {
    /// Delete even if the file is the configured main file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `backup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BackupArgs {
    /// Suffix placed before the timestamp (default from config).
    #[arg(short = 's', long, value_name = "SUFFIX")]
    pub suffix: Option<String>,
}

/// Arguments for the `restore` command.
#[derive(Debug, Clone, Args)]
pub struct RestoreArgs {
    /// Backup file to copy back.
    #[arg(value_name = "BACKUP")]
    pub backup: PathBuf,
}

/// Arguments for the `merge` command.
#[derive(Debug, Clone, Args)]
pub struct MergeArgs {
    /// Env file to import from.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Only import these keys.
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Never import these keys.
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub except: Vec<String>,
}
