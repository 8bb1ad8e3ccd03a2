//! GFF3 feature records
//!
//! A [`Feature`] is one parsed annotation line: a gene, transcript, exon,
//! and so on. Column value `.` is the GFF3 sentinel for "absent" and maps
//! to `None` on every optional field, round-tripping losslessly.

use crate::core::attributes::{AttributeValue, Attributes};
use crate::core::error::{MultipleParentsError, ParseError};
use crate::core::formatter::Formatter;
use crate::core::parser::RecordParser;
use std::fmt;
use std::str::FromStr;

/// Strand of a genomic feature.
///
/// The `.` column value means "no strand" and is represented as `None`
/// on [`Feature::strand`]; `?` means the strand is relevant but unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    /// Forward strand (`+`)
    Forward,
    /// Reverse strand (`-`)
    Reverse,
    /// Relevant but unknown (`?`)
    Unknown,
}

impl Strand {
    /// Parse a strand character, returning None for anything unrecognized
    pub fn from_char(c: char) -> Option<Strand> {
        match c {
            '+' => Some(Strand::Forward),
            '-' => Some(Strand::Reverse),
            '?' => Some(Strand::Unknown),
            _ => None,
        }
    }

    /// The character this strand renders as in column 7
    pub fn to_char(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '?',
        }
    }
}

/// One parsed GFF3 annotation record.
///
/// Constructed by [`RecordParser`] or directly by a caller. The tree
/// builder never mutates features; it clones them into nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Sequence (chromosome/scaffold) the feature lies on
    pub seqid: String,
    /// Annotation source (program or database)
    pub source: String,
    /// Feature type (gene, mRNA, exon, ...); `type` is reserved in Rust
    pub feature_type: String,
    /// Start position, 1-based inclusive
    pub start: Option<u64>,
    /// End position, 1-based inclusive, >= start
    pub end: Option<u64>,
    pub score: Option<f64>,
    pub strand: Option<Strand>,
    /// Coding phase 0-2; meaningful only for CDS-type features
    pub phase: Option<u8>,
    pub attributes: Attributes,
}

impl Feature {
    /// Span length in bases: `end - start + 1`.
    ///
    /// None when either coordinate is absent, or when `end < start`
    /// (the parser does not range-validate coordinates).
    pub fn length(&self) -> Option<u64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.checked_sub(start).map(|span| span + 1),
            _ => None,
        }
    }

    /// The `ID` attribute, which most linkable records carry
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("ID")
    }

    /// Set the `ID` attribute
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.attributes.insert("ID", id.into());
    }

    /// All declared parent IDs from the `Parent` attribute.
    ///
    /// GFF3 allows multiple parents (`Parent=a,b`), so this always
    /// returns a sequence; empty when no `Parent` attribute is present.
    pub fn parent_ids(&self) -> Vec<&str> {
        self.attributes.get_list("Parent")
    }

    /// Replace the `Parent` attribute with the given IDs
    pub fn set_parent_ids(&mut self, ids: &[&str]) {
        let value = if ids.len() > 1 {
            AttributeValue::List(ids.iter().map(|s| s.to_string()).collect())
        } else {
            AttributeValue::Scalar(ids.first().map(|s| s.to_string()).unwrap_or_default())
        };
        self.attributes.insert("Parent", value);
    }

    /// The single declared parent ID.
    ///
    /// Most records have at most one parent, so this convenience accessor
    /// assumes one. A record with several parents yields
    /// [`MultipleParentsError`] so the caller notices rather than silently
    /// getting the first.
    pub fn parent_id(&self) -> Result<Option<&str>, MultipleParentsError> {
        let parents = self.parent_ids();
        match parents.len() {
            0 => Ok(None),
            1 => Ok(Some(parents[0])),
            count => Err(MultipleParentsError { count }),
        }
    }

    /// Set a single parent ID
    pub fn set_parent_id(&mut self, id: impl Into<String>) {
        self.attributes.insert("Parent", id.into());
    }
}

impl FromStr for Feature {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, ParseError> {
        RecordParser::new().parse(line)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::new().format(self))
    }
}
