//! GFF3 record formatting
//!
//! Serializes a [`Feature`] back to the canonical 9-column tab-delimited
//! line. The exact inverse of record parsing for parser-produced features:
//! absent fields render as `.`, and the ordered attribute container means
//! the attribute column comes back byte-identical.

use crate::core::attributes::Dialect;
use crate::core::feature::Feature;
use std::fmt::Write;

/// Formats [`Feature`]s into GFF3 record lines.
///
/// Carries the attribute dialect so custom-dialect records round-trip
/// through the matching [`RecordParser`](crate::core::RecordParser).
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    dialect: Dialect,
}

impl Formatter {
    /// Formatter for canonical GFF3 output
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter with a non-default attribute dialect
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Render a feature as a 9-column tab-delimited GFF3 line
    pub fn format(&self, feature: &Feature) -> String {
        let mut line = String::with_capacity(64);

        line.push_str(&feature.seqid);
        line.push('\t');
        line.push_str(&feature.source);
        line.push('\t');
        line.push_str(&feature.feature_type);
        line.push('\t');
        push_column(&mut line, feature.start);
        line.push('\t');
        push_column(&mut line, feature.end);
        line.push('\t');
        push_column(&mut line, feature.score);
        line.push('\t');
        match feature.strand {
            Some(strand) => line.push(strand.to_char()),
            None => line.push('.'),
        }
        line.push('\t');
        push_column(&mut line, feature.phase);
        line.push('\t');
        line.push_str(&feature.attributes.format_with(self.dialect));

        line
    }
}

/// Render an optional numeric column, with `.` for absence
fn push_column<T: std::fmt::Display>(line: &mut String, value: Option<T>) {
    match value {
        Some(value) => {
            // writing to a String cannot fail
            let _ = write!(line, "{}", value);
        }
        None => line.push('.'),
    }
}

/// Render a feature with the default formatter
pub fn format_record(feature: &Feature) -> String {
    Formatter::new().format(feature)
}
