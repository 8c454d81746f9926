// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented model of an env file.
//!
//! ```text
//! text --parse--> EnvDocument [Line, Line, ...] --to_string--> text
//!
//! Line { text, eol, kind }
//!   Blank         whitespace only
//!   Comment       '#' after optional indentation
//!   Assignment    KEY=raw value (key trimmed, first '=')
//!   Unrecognized  anything else, kept verbatim
//!
//! Mutations touch only the target lines; all other lines
//! serialize byte-for-byte as they were read.
//! ```
//!
//! # Duplicate keys
//!
//! Hand-edited files may repeat a key. Lookups (`find`, `contains`,
//! `value`) and `upsert` act on the first occurrence, `remove` drops every
//! occurrence, and [`EnvDocument::to_map`] keeps the last value.

pub mod codec;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use serde::ser::SerializeMap;

pub use codec::{EnvValue, decode, encode};

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// `value_start` is the byte offset just past the first `=`.
    Assignment { key: String, value_start: usize },
    Unrecognized,
}

/// One line of an env file, including its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    eol: &'static str,
    kind: LineKind,
}

impl Line {
    fn new(text: impl Into<String>, eol: &'static str) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, eol, kind }
    }

    /// Line content without its terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line terminator (`"\n"`, `"\r\n"`, `"\r"`, or empty on the last line).
    #[must_use]
    pub const fn eol(&self) -> &'static str {
        self.eol
    }

    #[must_use]
    pub const fn kind(&self) -> &LineKind {
        &self.kind
    }

    /// Key of an assignment line.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Assignment { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Everything after the first `=` of an assignment line.
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Assignment { value_start, .. } => Some(&self.text[*value_start..]),
            _ => None,
        }
    }

    fn set_value(&mut self, encoded: &str) {
        if let LineKind::Assignment { value_start, .. } = self.kind {
            self.text.truncate(value_start);
            self.text.push_str(encoded);
        }
    }

    fn is_bare_break(&self) -> bool {
        self.text.is_empty() && !self.eol.is_empty()
    }
}

fn classify(text: &str) -> LineKind {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    match text.split_once('=') {
        Some((key, _)) if !key.trim().is_empty() => LineKind::Assignment {
            key: key.trim().to_string(),
            value_start: key.len() + 1,
        },
        _ => LineKind::Unrecognized,
    }
}

/// Parsed env file that can be mutated and written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDocument {
    lines: Vec<Line>,
}

impl EnvDocument {
    /// Split `text` into lines, accepting `\n`, `\r\n` and `\r` terminators.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let Some(idx) = rest.find(['\n', '\r']) else {
                lines.push(Line::new(rest, ""));
                break;
            };
            let eol = if rest[idx..].starts_with("\r\n") {
                "\r\n"
            } else if rest[idx..].starts_with('\n') {
                "\n"
            } else {
                "\r"
            };
            lines.push(Line::new(&rest[..idx], eol));
            rest = &rest[idx + eol.len()..];
        }

        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Terminator used for new lines: the first one seen, `\n` otherwise.
    #[must_use]
    pub fn line_break(&self) -> &'static str {
        self.lines
            .iter()
            .map(Line::eol)
            .find(|eol| !eol.is_empty())
            .unwrap_or("\n")
    }

    /// Raw value of the first assignment to `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key() == Some(key))
            .and_then(Line::raw_value)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Decoded value of the first assignment to `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.find(key).map(decode)
    }

    /// Replace the value of the first assignment to `key`, or append one.
    pub fn upsert(&mut self, key: &str, encoded: &str) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.key() == Some(key)) {
            line.set_value(encoded);
            return;
        }

        let eol = self.line_break();
        if let Some(last) = self.lines.last_mut()
            && last.eol.is_empty()
        {
            last.eol = eol;
        }
        self.lines.push(Line::new(format!("{key}={encoded}"), ""));
    }

    /// Encode `value` and upsert it under `key`.
    pub fn upsert_value(&mut self, key: &str, value: &EnvValue) {
        self.upsert(key, &encode(value));
    }

    /// Remove every assignment to `key` with its terminator.
    ///
    /// Returns `true` if any line was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.key() != Some(key));
        self.lines.len() != before
    }

    /// Collapse runs of three or more line breaks down to two.
    pub fn collapse_blank_runs(&mut self) {
        let mut run = 0usize;
        self.lines.retain(|line| {
            if line.is_bare_break() {
                run += 1;
                run <= 2
            } else {
                run = usize::from(!line.eol.is_empty());
                true
            }
        });
    }

    /// All assignments as decoded values, later duplicates overwriting earlier ones.
    #[must_use]
    pub fn to_map(&self) -> EnvMap {
        self.lines
            .iter()
            .filter_map(|line| Some((line.key()?, decode(line.raw_value()?))))
            .collect()
    }
}

impl fmt::Display for EnvDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&line.text)?;
            f.write_str(line.eol)?;
        }
        Ok(())
    }
}

/// Parse every assignment in `text` into an ordered key/value map.
#[must_use]
pub fn parse_all(text: &str) -> EnvMap {
    EnvDocument::parse(text).to_map()
}

/// Insertion-ordered map of env keys to decoded values.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(String, String)>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for EnvMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
