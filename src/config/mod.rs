// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envmod.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envmod.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVMOD_* env vars
//! 5. CLI overrides (--file, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVMOD_EDITOR__FILE=.env.local         → editor.file
//! ENVMOD_EDITOR__LOCK_SCOPE=operation    → editor.lock_scope
//! ENVMOD_GLOBAL__OUTPUT_LOG_LEVEL=3      → global.output_log_level
//! ```
//!
//! # Example
//!
//! ```toml
//! [editor]
//! file = "deploy/.env"
//! main_file = "deploy/.env"
//! backup_suffix = ".orig"
//! lock_scope = "operation"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{EditorConfig, GlobalConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envmod.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Env file editing options.
    pub editor: EditorConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envmod::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envmod.toml")
    ///     .with_env_prefix("ENVMOD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an editor option is unusable.
    pub fn validate(&self) -> Result<()> {
        self.editor.validate()?;
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_editor_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_editor_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "editor.file".into(),
            self.editor.file.display().to_string(),
        );
        if let Some(main_file) = &self.editor.main_file {
            options.insert("editor.main_file".into(), main_file.display().to_string());
        }
        options.insert(
            "editor.backup_suffix".into(),
            self.editor.backup_suffix.clone(),
        );
        options.insert(
            "editor.lock_scope".into(),
            self.editor.lock_scope.to_string(),
        );
    }
}
