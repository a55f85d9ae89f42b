//! Shared types flowing from the frontmatter parser to the card renderers.
//!
//! Every content file becomes one [`Entry`]: a mapping of frontmatter keys to
//! [`FieldValue`]s plus the free-text body and the filename stem. No field is
//! required. Renderers read through the typed accessors on [`Entry`], each of
//! which takes an explicit default for the absent case.

use std::collections::BTreeMap;
use std::fmt;

/// A numeric frontmatter value.
///
/// Integers and floats are kept apart so `year: 2024` renders as `2024` and
/// `version: 1.0` renders as `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{i}"),
            // Whole floats keep their decimal point so they read back as floats
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// One frontmatter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Scalar string, with one layer of matching quotes already stripped.
    Text(String),
    Number(Number),
    Boolean(bool),
    /// Key declared with an empty value followed by `  - item` lines.
    List(Vec<String>),
    /// Key declared with `|`; lines are kept verbatim, newline-joined.
    Multiline(String),
}

impl FieldValue {
    /// Whether the value counts as "set" for optional HTML blocks.
    ///
    /// Empty strings, `false`, zero and empty lists are all unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Multiline(s) => !s.is_empty(),
            FieldValue::Number(Number::Integer(i)) => *i != 0,
            FieldValue::Number(Number::Float(f)) => *f != 0.0,
            FieldValue::Boolean(b) => *b,
            FieldValue::List(items) => !items.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Multiline(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Multiline(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Parsed frontmatter, keyed by field name.
///
/// Ordered so that anything iterating the fields does so deterministically.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single content file, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub fields: Fields,
    /// Everything after the closing frontmatter delimiter, trimmed.
    pub body: String,
    /// Source filename without the `.md` extension.
    pub stem: String,
}

impl Entry {
    pub fn new(fields: Fields, body: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            fields,
            body: body.into(),
            stem: stem.into(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Field rendered as a string, or `default` when the key is absent.
    ///
    /// A present-but-empty value stays empty; only absence triggers the default.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map(ToString::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// Field rendered as a string, only when present and truthy.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| v.is_truthy())
            .map(ToString::to_string)
    }

    /// Field as a list of strings. A truthy scalar counts as a one-item list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(FieldValue::List(items)) => items.clone(),
            Some(v) if v.is_truthy() => vec![v.to_string()],
            _ => Vec::new(),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(FieldValue::is_truthy)
    }

    /// Numeric field, or `None` if absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(FieldValue::Number(n)) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Integer field. Integer-looking text (`"2024"`) is accepted too.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(FieldValue::Number(Number::Integer(i))) => Some(*i),
            Some(FieldValue::Text(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Stable identifier for the entry: the `slug` field, else the filename stem.
    pub fn identifier(&self) -> String {
        self.text("slug").unwrap_or_else(|| self.stem.clone())
    }
}
