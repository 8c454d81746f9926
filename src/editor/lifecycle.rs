// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file operations: create, delete, backup, restore, merge.
//!
//! ```text
//! create_file      mkdir -p parent, AlreadyExists unless overwrite, optional rebind
//! delete_file      ProtectedDelete when bound file is the main file (unless force)
//! backup           copy to {path}{suffix}.{YYYYMMDD_HHMMSS}
//! restore          backup bytes --> bound file, optional rebind to backup
//! merge_from_path  parse source, filter only/except, set()
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use chrono::Local;
use tracing::{debug, info, warn};

use super::{EnvEditor, io};
use crate::document::{EnvValue, encode, parse_all};
use crate::error::{EnvError, EnvResult};

/// Suffix placed between the original path and the backup timestamp.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Initial content of a newly created env file.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FileContent {
    /// An empty file.
    #[default]
    Empty,
    /// Text written as-is, terminated by a single newline.
    Raw(String),
    /// One `KEY=value` line per pair, in order.
    Pairs(Vec<(String, EnvValue)>),
}

impl FileContent {
    /// Build [`FileContent::Pairs`] from any key/value iterator.
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<EnvValue>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Render the file text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Raw(text) if text.is_empty() || text.ends_with('\n') => text.clone(),
            Self::Raw(text) => format!("{text}\n"),
            Self::Pairs(pairs) => pairs
                .iter()
                .map(|(key, value)| format!("{key}={}\n", encode(value)))
                .collect(),
        }
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

/// Options for [`EnvEditor::create_file`].
#[derive(Debug, Clone, Copy, Builder)]
pub struct CreateOptions {
    #[builder(setters(name = with_overwrite), default = false)]
    overwrite: bool,
    #[builder(setters(name = with_bind), default = true)]
    bind: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CreateOptions {
    /// Whether an existing file may be replaced.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Whether the editor is rebound to the new file.
    #[must_use]
    pub const fn bind(&self) -> bool {
        self.bind
    }
}

impl EnvEditor {
    /// Create a new env file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::DirectoryCreate`] if the parent directory cannot be
    /// created, [`EnvError::AlreadyExists`] if the file exists and overwriting
    /// was not requested, or [`EnvError::Io`] if writing fails.
    pub fn create_file(
        &mut self,
        path: impl AsRef<Path>,
        content: &FileContent,
        options: CreateOptions,
    ) -> EnvResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| EnvError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        io::create_locked(path, content.render().as_bytes(), options.overwrite())?;
        info!(path = %path.display(), "Created env file");

        if options.bind() {
            self.path = Some(path.to_path_buf());
        }
        Ok(())
    }

    /// Delete the bound file.
    ///
    /// When `main_path` refers to the same file as the bound path, deletion
    /// requires `force`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] or [`EnvError::FileNotFound`] if there is
    /// no bound file, [`EnvError::ProtectedDelete`] for the main file without
    /// `force`, or [`EnvError::Io`] if removal fails.
    pub fn delete_file(&self, force: bool, main_path: Option<&Path>) -> EnvResult<()> {
        let path = self.bound_file()?;

        if let Some(main) = main_path
            && is_same_file(path, main)
        {
            if !force {
                return Err(EnvError::ProtectedDelete {
                    path: path.to_path_buf(),
                });
            }
            warn!(path = %path.display(), "Force deleting main env file");
        }

        fs::remove_file(path).map_err(|e| EnvError::io("delete", path, e))?;
        info!(path = %path.display(), "Deleted env file");
        Ok(())
    }

    /// Copy the bound file to `{path}{suffix}.{YYYYMMDD_HHMMSS}`.
    ///
    /// Returns the path of the backup.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] or [`EnvError::FileNotFound`] if there is
    /// no bound file, or [`EnvError::Io`] if the copy fails.
    pub fn backup(&self, suffix: &str) -> EnvResult<PathBuf> {
        let path = self.bound_file()?;
        let backup = backup_path(path, suffix);

        fs::copy(path, &backup).map_err(|e| EnvError::io("back up", path, e))?;
        info!(from = %path.display(), to = %backup.display(), "Backed up env file");
        Ok(backup)
    }

    /// Overwrite the bound file with the content of `backup`.
    ///
    /// With `bind`, the editor targets `backup` afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] if no file is bound, or [`EnvError::Io`]
    /// if the backup cannot be read or the bound file cannot be written.
    pub fn restore(&mut self, backup: impl AsRef<Path>, bind: bool) -> EnvResult<()> {
        let backup = backup.as_ref();
        let target = self.path.as_deref().ok_or(EnvError::NotBound)?;

        let bytes = fs::read(backup).map_err(|e| EnvError::io("read backup", backup, e))?;
        io::write_locked(target, &bytes)?;
        info!(from = %backup.display(), to = %target.display(), "Restored env file");

        if bind {
            debug!(path = %backup.display(), "Rebinding to backup");
            self.path = Some(backup.to_path_buf());
        }
        Ok(())
    }

    /// Import pairs from another env file into the bound file.
    ///
    /// A non-empty `only` keeps just those keys; `except` is then removed.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Io`] if `source` cannot be read, or an error from
    /// [`EnvEditor::set`] for the bound file.
    pub fn merge_from_path<S: AsRef<str>>(
        &self,
        source: impl AsRef<Path>,
        only: &[S],
        except: &[S],
    ) -> EnvResult<()> {
        let source = source.as_ref();
        let text = io::read_text(source)?;

        let mut entries = parse_all(&text);
        if !only.is_empty() {
            entries.retain(|key, _| only.iter().any(|k| k.as_ref() == key));
        }
        if !except.is_empty() {
            entries.retain(|key, _| !except.iter().any(|k| k.as_ref() == key));
        }

        if entries.is_empty() {
            debug!(source = %source.display(), "Nothing to merge after filtering");
        }
        let count = entries.len();
        self.set(entries)?;
        info!(source = %source.display(), count, "Merged env file");
        Ok(())
    }
}

/// Name of a backup of `path` taken now.
fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let stamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    name.push(format!(".{stamp}"));
    PathBuf::from(name)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
