// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-level command handlers.

use std::io::Write;

use anyhow::Context;

use super::open_editor;
use crate::cli::key::{AllArgs, GetArgs, HasArgs, RenameArgs, SetArgs, UnsetArgs};
use crate::config::Config;
use crate::document::{EnvMap, EnvValue, encode};
use crate::error::Result;

/// Print every pair of the configured file.
///
/// # Errors
///
/// Returns an error if the file is missing or output fails.
pub fn run_all_command(args: &AllArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let values = open_editor(config)?.all()?;
    print_map(&values, args.json, out)
}

/// Print the requested keys; missing keys print as empty.
///
/// # Errors
///
/// Returns an error if the file is missing or output fails.
pub fn run_get_command(args: &GetArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let values = open_editor(config)?.get(&args.keys)?;
    print_map(&values, args.json, out)
}

/// Whether the key is assigned.
///
/// # Errors
///
/// Returns an error if the file is missing.
pub fn run_has_command(args: &HasArgs, config: &Config) -> Result<bool> {
    Ok(open_editor(config)?.has(&args.key)?)
}

/// Upsert the given pairs.
///
/// # Errors
///
/// Returns an error if a value is not valid JSON under `--json-values`, or if
/// the file is missing or cannot be written.
pub fn run_set_command(args: &SetArgs, config: &Config) -> Result<()> {
    let editor = open_editor(config)?;

    let pairs = args
        .pairs
        .iter()
        .map(|(key, value)| Ok((key.as_str(), to_value(key, value, args.json_values)?)))
        .collect::<Result<Vec<_>>>()?;

    if args.if_missing {
        editor.set_if_missing(pairs)?;
    } else {
        editor.set(pairs)?;
    }
    Ok(())
}

/// Rename a key.
///
/// # Errors
///
/// Returns an error if the target exists without `--overwrite`, or if the
/// file is missing or cannot be written.
pub fn run_rename_command(args: &RenameArgs, config: &Config) -> Result<()> {
    open_editor(config)?.rename(&args.from, &args.to, args.overwrite)?;
    Ok(())
}

/// Remove the given keys.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be written.
pub fn run_unset_command(args: &UnsetArgs, config: &Config) -> Result<()> {
    open_editor(config)?.delete(&args.keys)?;
    Ok(())
}

fn to_value(key: &str, raw: &str, json: bool) -> Result<EnvValue> {
    if !json {
        return Ok(EnvValue::from(raw));
    }
    let parsed: serde_json::Value = serde_json::from_str(raw)
        .with_context(|| format!("value of '{key}' is not valid JSON: {raw}"))?;
    Ok(EnvValue::from(parsed))
}

/// Print as `KEY=value` lines in stored form, or as a JSON object.
fn print_map(values: &EnvMap, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, values)?;
        writeln!(out)?;
        return Ok(());
    }
    for (key, value) in values.iter() {
        writeln!(out, "{key}={}", encode(&EnvValue::from(value)))?;
    }
    Ok(())
}
