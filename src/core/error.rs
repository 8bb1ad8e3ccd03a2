//! Error types for gff-forest
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Stream-level error type for reading GFF3 sources
#[derive(Debug, Error)]
pub enum GffError {
    /// A record failed to parse; carries the 1-based line number
    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing a single GFF3 record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A record does not split into exactly 9 tab-separated fields
    #[error("Expected 9 tab-separated columns, found {found}")]
    ColumnCount { found: usize },

    /// A present field failed type conversion
    #[error("Invalid {field} value '{value}'")]
    FieldFormat { field: &'static str, value: String },

    /// An attribute token has no key/value separator
    #[error("Attribute token '{token}' has no '{separator}' separator")]
    AttributeSyntax { token: String, separator: char },
}

impl ParseError {
    pub(crate) fn field(field: &'static str, value: &str) -> Self {
        ParseError::FieldFormat {
            field,
            value: value.to_string(),
        }
    }
}

/// Raised by the singular parent accessor when a record declares
/// more than one parent. The tree builder never raises this; it
/// supports multi-parent records directly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Record declares {count} parents where a single parent was expected")]
pub struct MultipleParentsError {
    /// Number of parents the record actually declares
    pub count: usize,
}

/// Result type alias for stream-level operations
pub type Result<T> = std::result::Result<T, GffError>;

/// Result type alias for record parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;
