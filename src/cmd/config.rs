// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envmod.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_configs_command(config_files: &[String], out: &mut impl Write) -> Result<()> {
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in config_files {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
