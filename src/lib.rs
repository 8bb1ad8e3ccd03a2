//! gff-forest - GFF3 parsing and feature-tree reconstruction
//!
//! Parses GFF3 annotation records into typed features with ordered
//! attributes, and rebuilds the parent/child hierarchy those records
//! encode (chromosome, gene, transcript, exon, ...).
//!
//! # Features
//!
//! - Strict single-pass record parser with typed per-field errors
//! - Order-preserving attributes for byte-exact round-trip formatting
//! - Tree builder tolerant of real-world irregularities: out-of-order
//!   records, multiple parents per record, missing `Parent` attributes
//! - Transparent reading of gzip/bzip2-compressed files
//!
//! # Example
//!
//! ```ignore
//! use gff_forest::{build_forest, Reader};
//!
//! // Parse an annotation file, keeping only well-formed records
//! let records = Reader::from_path("annotation.gff")?
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! // Rebuild the feature hierarchy
//! let forest = build_forest(records);
//! for node in forest.walk() {
//!     println!("{}", forest.feature(node).feature_type);
//! }
//! ```

pub mod core;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    detect_compression, format_record, parse_record, read_features, AttributeValue, Attributes,
    CompressionFormat, Dialect, Feature, Formatter, GffError, MultipleParentsError, ParseError,
    ParseResult, Reader, RecordParser, Result, Strand, COLUMN_COUNT,
};
pub use crate::tree::{build_forest, Forest, NodeId, Walk};
