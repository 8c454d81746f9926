// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file reads and exclusive-lock writes.
//!
//! ```text
//! read_text        fs::read_to_string, no lock
//! write_locked     open (no truncate) -> lock -> truncate -> write -> sync
//! create_locked    create_new or open, then as write_locked
//! update_locked    open rw -> lock -> read -> transform -> rewrite
//! ```
//!
//! Locks are advisory and released when the handle is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{EnvError, EnvResult};

/// Read the whole file as text.
pub(crate) fn read_text(path: &Path) -> EnvResult<String> {
    fs::read_to_string(path).map_err(|e| EnvError::io("read", path, e))
}

/// Overwrite `path` with `content` while holding an exclusive lock.
///
/// The file is created if it does not exist.
pub(crate) fn write_locked(path: &Path, content: &[u8]) -> EnvResult<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| EnvError::io("open", path, e))?;
    write_under_lock(file, path, content)
}

/// Create `path` and write `content` under an exclusive lock.
///
/// Without `overwrite`, an existing file yields [`EnvError::AlreadyExists`].
pub(crate) fn create_locked(path: &Path, content: &[u8], overwrite: bool) -> EnvResult<()> {
    if overwrite {
        return write_locked(path, content);
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                EnvError::AlreadyExists {
                    path: path.to_path_buf(),
                }
            } else {
                EnvError::io("create", path, e)
            }
        })?;
    write_under_lock(file, path, content)
}

/// Read, transform and rewrite `path` under a single exclusive lock.
///
/// `transform` returns the new content, or `None` to leave the file as is.
pub(crate) fn update_locked<F>(path: &Path, transform: F) -> EnvResult<()>
where
    F: FnOnce(&str) -> EnvResult<Option<String>>,
{
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| EnvError::io("open", path, e))?;
    file.lock().map_err(|e| EnvError::io("lock", path, e))?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| EnvError::io("read", path, e))?;

    if let Some(updated) = transform(&text)? {
        replace_contents(&mut file, updated.as_bytes())
            .map_err(|e| EnvError::io("write", path, e))?;
    }
    Ok(())
}

fn write_under_lock(mut file: File, path: &Path, content: &[u8]) -> EnvResult<()> {
    file.lock().map_err(|e| EnvError::io("lock", path, e))?;
    replace_contents(&mut file, content).map_err(|e| EnvError::io("write", path, e))
}

fn replace_contents(file: &mut File, content: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content)?;
    file.sync_all()
}
