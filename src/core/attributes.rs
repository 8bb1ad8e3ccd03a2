//! GFF3 attribute column handling
//!
//! The 9th GFF column holds `key=value` pairs separated by `;`, where a
//! value may itself be a `,`-separated list (`Parent=a,b`). Attributes are
//! stored in an order-preserving map so a parsed record re-serializes in
//! the order its attributes appeared. The ordered container costs more per
//! insertion than a plain hash map; round-trip fidelity is worth it here.

use crate::core::error::{ParseError, ParseResult};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Attribute syntax dialect.
///
/// GFF3 separates keys from values with `=`. Dialects descended from GFF2
/// use other separators, so the parser and formatter take the dialect as an
/// explicit strategy value rather than global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Character separating a key from its value within one token
    pub key_value_separator: char,
}

impl Dialect {
    /// Canonical GFF3 dialect: `key=value`
    pub const GFF3: Dialect = Dialect {
        key_value_separator: '=',
    };
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::GFF3
    }
}

/// A single attribute value: a bare string or an ordered multi-value list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Scalar(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// The scalar value, or the first element of a list
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(s) => Some(s),
            AttributeValue::List(items) => items.first().map(|s| s.as_str()),
        }
    }

    /// All values, wrapping a scalar as a one-element sequence
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            AttributeValue::Scalar(s) => vec![s.as_str()],
            AttributeValue::List(items) => items.iter().map(|s| s.as_str()).collect(),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Scalar(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        AttributeValue::List(values)
    }
}

/// Ordered key-to-value(s) mapping for one record's attribute column.
///
/// Keys are unique within one record; insertion order is preserved for
/// deterministic re-serialization. An empty raw attribute string parses to
/// an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: IndexMap<String, AttributeValue>,
}

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw attribute column using the GFF3 dialect
    pub fn parse(raw: &str) -> ParseResult<Self> {
        Self::parse_with(raw, Dialect::GFF3)
    }

    /// Parse a raw attribute column using an explicit dialect.
    ///
    /// Tokens are split on `;` and whitespace-trimmed; empty tokens are
    /// dropped. Each token splits on the first key/value separator, and
    /// each value splits on `,` into a list when more than one part
    /// results. A token with no separator fails the parse.
    pub fn parse_with(raw: &str, dialect: Dialect) -> ParseResult<Self> {
        let sep = dialect.key_value_separator;
        let mut entries = IndexMap::new();

        for token in raw.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let split = token.find(sep).ok_or_else(|| ParseError::AttributeSyntax {
                token: token.to_string(),
                separator: sep,
            })?;
            let key = &token[..split];
            let value = &token[split + sep.len_utf8()..];

            let parts: Vec<&str> = value.split(',').collect();
            let value = if parts.len() > 1 {
                AttributeValue::List(parts.into_iter().map(|p| p.to_string()).collect())
            } else {
                AttributeValue::Scalar(value.to_string())
            };
            entries.insert(key.to_string(), value);
        }

        Ok(Self { entries })
    }

    /// Serialize back to the GFF3 attribute column format
    pub fn format(&self) -> String {
        self.format_with(Dialect::GFF3)
    }

    /// Serialize using an explicit dialect.
    ///
    /// List values are rejoined with `,` and entries with `;`, in the
    /// set's iteration order. The inverse of [`Attributes::parse_with`]
    /// for canonically-spaced input.
    pub fn format_with(&self, dialect: Dialect) -> String {
        let sep = dialect.key_value_separator;
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(key);
            out.push(sep);
            match value {
                AttributeValue::Scalar(s) => out.push_str(s),
                AttributeValue::List(items) => out.push_str(&items.join(",")),
            }
        }
        out
    }

    /// Look up a single value: the scalar, or the first element of a list
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|v| v.as_str())
    }

    /// Look up all values for a key, wrapping a scalar as a one-element
    /// sequence. Returns an empty sequence for a missing key.
    pub fn get_list(&self, key: &str) -> Vec<&str> {
        self.entries.get(key).map(|v| v.as_list()).unwrap_or_default()
    }

    /// Look up the underlying value
    pub fn get_value(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Insert or replace a value. A replaced key keeps its original
    /// position in iteration order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a key, preserving the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromStr for Attributes {
    type Err = ParseError;

    fn from_str(raw: &str) -> ParseResult<Self> {
        Attributes::parse(raw)
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
