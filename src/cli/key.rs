// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-level command arguments.

use clap::Args;

use super::parse_pair;

/// Arguments for the `all` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AllArgs {
    /// Print a JSON object instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Keys to look up.
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Print a JSON object instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `has` command.
#[derive(Debug, Clone, Args)]
pub struct HasArgs {
    /// Key to check.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Assignments, split at the first '='.
    #[arg(value_name = "KEY=VALUE", required = true, value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,

    /// Only set keys that are absent or empty.
    #[arg(long = "if-missing")]
    pub if_missing: bool,

    /// Parse values as JSON: `true`, `null` and objects are stored as such.
    #[arg(long = "json-values")]
    pub json_values: bool,
}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Current key.
    #[arg(value_name = "FROM")]
    pub from: String,

    /// New key.
    #[arg(value_name = "TO")]
    pub to: String,

    /// Replace TO if it already exists.
    #[arg(short = 'o', long)]
    pub overwrite: bool,
}

/// Arguments for the `unset` command.
#[derive(Debug, Clone, Args)]
pub struct UnsetArgs {
    /// Keys to remove.
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,
}
