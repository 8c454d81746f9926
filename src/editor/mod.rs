// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The env file engine.
//!
//! ```text
//! EnvEditor { path: Option<PathBuf>, lock_scope }
//!        |
//!        | bound_file()  NotBound / FileNotFound, checked per call
//!        v
//!  read --> EnvDocument --> transform --> write (exclusive lock)
//!
//! key ops   all, get, has, set, set_if_missing, rename, delete
//! file ops  create_file, delete_file, backup, restore, merge_from_path
//! ```
//!
//! # Lock scope
//!
//! ```text
//! Write      read unlocked, lock only the rewrite (last writer wins)
//! Operation  one lock held across read + transform + rewrite
//! ```

pub mod io;
pub mod lifecycle;


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{EnvDocument, EnvMap, EnvValue};
use crate::error::{EnvError, EnvResult};

pub use lifecycle::{CreateOptions, DEFAULT_BACKUP_SUFFIX, FileContent};

/// How long the exclusive lock is held during a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockScope {
    /// Lock only while writing.
    #[default]
    Write,
    /// Lock across the whole read-modify-write cycle.
    Operation,
}

impl std::fmt::Display for LockScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Operation => write!(f, "operation"),
        }
    }
}

/// Editor bound to at most one env file.
#[derive(Debug, Clone, Default)]
pub struct EnvEditor {
    path: Option<PathBuf>,
    lock_scope: LockScope,
}

impl EnvEditor {
    /// Create an unbound editor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            path: None,
            lock_scope: LockScope::Write,
        }
    }

    /// Create an editor bound to an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileNotFound`] if `path` does not exist.
    pub fn open(path: impl AsRef<Path>) -> EnvResult<Self> {
        let mut editor = Self::new();
        editor.bind(path)?;
        Ok(editor)
    }

    #[must_use]
    pub const fn with_lock_scope(mut self, lock_scope: LockScope) -> Self {
        self.lock_scope = lock_scope;
        self
    }

    /// Bind the editor to an existing file. The content is not read.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileNotFound`] if `path` does not exist.
    pub fn bind(&mut self, path: impl AsRef<Path>) -> EnvResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EnvError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "Binding env file");
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Currently bound path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn lock_scope(&self) -> LockScope {
        self.lock_scope
    }

    /// Bound path, verified to exist right now.
    fn bound_file(&self) -> EnvResult<&Path> {
        let path = self.path.as_deref().ok_or(EnvError::NotBound)?;
        if !path.exists() {
            return Err(EnvError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(path)
    }

    fn read_document(&self) -> EnvResult<EnvDocument> {
        let path = self.bound_file()?;
        let text = io::read_text(path)?;
        Ok(EnvDocument::parse(&text))
    }

    /// Run `transform` on the bound document and write it back when it returns `true`.
    fn modify<F>(&self, transform: F) -> EnvResult<()>
    where
        F: FnOnce(&mut EnvDocument) -> EnvResult<bool>,
    {
        let path = self.bound_file()?;
        match self.lock_scope {
            LockScope::Write => {
                let mut doc = EnvDocument::parse(&io::read_text(path)?);
                if transform(&mut doc)? {
                    io::write_locked(path, doc.to_string().as_bytes())?;
                }
                Ok(())
            }
            LockScope::Operation => io::update_locked(path, |text| {
                let mut doc = EnvDocument::parse(text);
                Ok(transform(&mut doc)?.then(|| doc.to_string()))
            }),
        }
    }

    /// All key/value pairs in file order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] or [`EnvError::FileNotFound`] if there is
    /// no readable bound file.
    pub fn all(&self) -> EnvResult<EnvMap> {
        Ok(self.read_document()?.to_map())
    }

    /// Values for `keys`; missing keys map to an empty string.
    ///
    /// Duplicate keys are reported once, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] or [`EnvError::FileNotFound`] if there is
    /// no readable bound file.
    pub fn get<S: AsRef<str>>(&self, keys: &[S]) -> EnvResult<EnvMap> {
        let doc = self.read_document()?;
        let mut values = EnvMap::new();
        for key in keys.iter().map(AsRef::as_ref) {
            if !values.contains_key(key) {
                values.insert(key, doc.value(key).unwrap_or_default());
            }
        }
        Ok(values)
    }

    /// Whether `key` is assigned on a non-comment line.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotBound`] or [`EnvError::FileNotFound`] if there is
    /// no readable bound file.
    pub fn has(&self, key: &str) -> EnvResult<bool> {
        Ok(self.read_document()?.contains(key))
    }

    /// Upsert every pair with a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound file is missing or cannot be rewritten.
    pub fn set<I, K, V>(&self, pairs: I) -> EnvResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<EnvValue>,
    {
        let pairs = collect_pairs(pairs);
        self.modify(|doc| {
            for (key, value) in &pairs {
                doc.upsert_value(key, value);
            }
            Ok(true)
        })?;
        info!(count = pairs.len(), "Set env values");
        Ok(())
    }

    /// Upsert only the keys whose current value is empty or absent.
    ///
    /// The file is rewritten once even when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound file is missing or cannot be rewritten.
    pub fn set_if_missing<I, K, V>(&self, pairs: I) -> EnvResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<EnvValue>,
    {
        let pairs = collect_pairs(pairs);
        let mut filled = 0usize;
        self.modify(|doc| {
            for (key, value) in &pairs {
                if doc.value(key).unwrap_or_default().is_empty() {
                    doc.upsert_value(key, value);
                    filled += 1;
                }
            }
            Ok(true)
        })?;
        info!(requested = pairs.len(), filled, "Set missing env values");
        Ok(())
    }

    /// Move the value of `from` to `to`.
    ///
    /// Nothing happens when `from == to` or `from` is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::RenameCollision`] if `to` exists and `overwrite` is
    /// false, or an error if the bound file is missing or cannot be rewritten.
    pub fn rename(&self, from: &str, to: &str, overwrite: bool) -> EnvResult<()> {
        if from == to {
            return Ok(());
        }

        let mut renamed = false;
        self.modify(|doc| {
            let Some(value) = doc.value(from).filter(|value| !value.is_empty()) else {
                return Ok(false);
            };
            if doc.contains(to) && !overwrite {
                return Err(EnvError::RenameCollision {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            doc.remove(from);
            doc.upsert_value(to, &EnvValue::Text(value));
            renamed = true;
            Ok(true)
        })?;

        if renamed {
            info!(from, to, "Renamed env key");
        } else {
            debug!(from, "Rename skipped, key is absent or empty");
        }
        Ok(())
    }

    /// Remove every line assigning one of `keys`, then collapse blank runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound file is missing or cannot be rewritten.
    pub fn delete<S: AsRef<str>>(&self, keys: &[S]) -> EnvResult<()> {
        let mut removed = 0usize;
        self.modify(|doc| {
            for key in keys {
                if doc.remove(key.as_ref()) {
                    removed += 1;
                }
            }
            doc.collapse_blank_runs();
            Ok(true)
        })?;
        info!(requested = keys.len(), removed, "Deleted env keys");
        Ok(())
    }
}

fn collect_pairs<I, K, V>(pairs: I) -> Vec<(String, EnvValue)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<EnvValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.into()))
        .collect()
}
