// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value codec for stored env values.
//!
//! ```text
//! encode(EnvValue)            decode(raw)
//!   Null      --> ""            trim
//!   Bool      --> true/false    "..." / '...'  strip, \" \' --> quote
//!   Json      --> compact JSON  \n --> newline
//!   Text      --> \r\n, \n, \r as \n,
//!                 quoted if whitespace, '#' or '='
//! ```

use serde_json::Value;

/// A logical value to be stored in an env file.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Stored as an empty string.
    Null,
    /// Stored as `true` or `false`.
    Bool(bool),
    /// Plain text, escaped and quoted as needed.
    Text(String),
    /// Structured data, stored as compact JSON.
    Json(Value),
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for EnvValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for EnvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Value> for EnvValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Text(n.to_string()),
            structured @ (Value::Array(_) | Value::Object(_)) => Self::Json(structured),
        }
    }
}

/// Macro to generate `From` implementations for numbers stored as text.
macro_rules! impl_from_number {
    ($($number:ty),+ $(,)?) => {
        $(
            impl From<$number> for EnvValue {
                fn from(value: $number) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )+
    };
}

impl_from_number!(i32, i64, u16, u32, u64, usize, f64);

/// Encode a value into the text written after `KEY=`.
#[must_use]
pub fn encode(value: &EnvValue) -> String {
    match value {
        EnvValue::Null => String::new(),
        EnvValue::Bool(b) => b.to_string(),
        EnvValue::Json(json) => json.to_string(),
        EnvValue::Text(text) => encode_text(text),
    }
}

fn encode_text(text: &str) -> String {
    let needs_quotes = text
        .chars()
        .any(|c| c.is_whitespace() || c == '#' || c == '=');

    // A lone `\r` is a line break to the parser too.
    let escaped = text.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n");

    if needs_quotes {
        format!("\"{}\"", escaped.replace('"', "\\\""))
    } else {
        escaped
    }
}

/// Decode a raw stored value back into its text.
///
/// A value wrapped in one matching pair of `"` or `'` has the pair removed
/// and escaped quotes restored. `\n` escapes become newlines either way.
#[must_use]
pub fn decode(raw: &str) -> String {
    let value = raw.trim();

    if let Some(inner) = strip_quotes(value) {
        let unquoted = inner.replace("\\\"", "\"").replace("\\'", "'");
        return unescape_newlines(&unquoted);
    }

    unescape_newlines(value)
}

fn strip_quotes(value: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}
