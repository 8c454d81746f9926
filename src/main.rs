// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   key: All | Get | Has | Set | Rename | Unset
//!   file: Create | Remove | Backup | Restore | Merge
//!   Options | Configs | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use envmod::cli::global::GlobalOptions;
use envmod::cli::{self, Command};
use envmod::cmd::config::{run_configs_command, run_options_command};
use envmod::cmd::exit_code_for;
use envmod::cmd::file::{
    run_backup_command, run_create_command, run_merge_command, run_remove_command,
    run_restore_command,
};
use envmod::cmd::key::{
    run_all_command, run_get_command, run_has_command, run_rename_command, run_set_command,
    run_unset_command,
};
use envmod::config::loader::ConfigLoader;
use envmod::config::{Config, DEFAULT_CONFIG_FILE};
use envmod::error::Result;
use envmod::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const ENV_PREFIX: &str = "ENVMOD";

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(command, &cli.global, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(command: &Command, global: &GlobalOptions, config: &Config) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();

    match command {
        Command::Version => writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?,
        Command::Options => run_options_command(config, &mut out)?,
        Command::Configs => {
            let loader = build_config_loader(global);
            run_configs_command(&loader.format_loaded_files(), &mut out)?;
        }
        Command::All(args) => run_all_command(args, config, &mut out)?,
        Command::Get(args) => run_get_command(args, config, &mut out)?,
        Command::Has(args) => {
            if !run_has_command(args, config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Set(args) => run_set_command(args, config)?,
        Command::Rename(args) => run_rename_command(args, config)?,
        Command::Unset(args) => run_unset_command(args, config)?,
        Command::Create(args) => run_create_command(args, config)?,
        Command::Remove(args) => run_remove_command(args, config)?,
        Command::Backup(args) => run_backup_command(args, config, &mut out)?,
        Command::Restore(args) => run_restore_command(args, config)?,
        Command::Merge(args) => run_merge_command(args, config)?,
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
