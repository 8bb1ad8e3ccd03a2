//! GFF3 record parsing
//!
//! Converts one raw tab-delimited line into a typed [`Feature`].
//! Parsing is a pure function of its input: no shared state, safe to call
//! from any number of threads on independent lines.

use crate::core::attributes::{Attributes, Dialect};
use crate::core::error::{ParseError, ParseResult};
use crate::core::feature::{Feature, Strand};
use memchr::memchr;

/// Number of tab-separated columns in a GFF3 record
pub const COLUMN_COUNT: usize = 9;

/// Parser for single GFF3 record lines.
///
/// Stateless apart from the attribute dialect, which is carried as an
/// explicit strategy value. For the common case use [`parse_record`] or
/// `Feature::from_str`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    dialect: Dialect,
}

impl RecordParser {
    /// Parser for canonical GFF3 input
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with a non-default attribute dialect
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Parse a single GFF3 record line.
    ///
    /// The line must split into exactly 9 tab-separated columns. A column
    /// containing exactly `.` is absent, which is distinct from a
    /// present-but-unparseable value: absence stays `None`, while a bad
    /// value fails with [`ParseError::FieldFormat`].
    pub fn parse(&self, line: &str) -> ParseResult<Feature> {
        let cols = split_columns(line)?;

        let start = parse_u64(cols[3], "start")?;
        let end = parse_u64(cols[4], "end")?;
        let score = match present(cols[5]) {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|_| ParseError::field("score", raw))?,
            ),
            None => None,
        };
        let strand = match present(cols[6]) {
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next().and_then(Strand::from_char), chars.next()) {
                    (Some(strand), None) => Some(strand),
                    _ => return Err(ParseError::field("strand", raw)),
                }
            }
            None => None,
        };
        let phase = match present(cols[7]) {
            Some(raw) => {
                let value = raw
                    .parse::<u8>()
                    .ok()
                    .filter(|p| *p <= 2)
                    .ok_or_else(|| ParseError::field("phase", raw))?;
                Some(value)
            }
            None => None,
        };
        let attributes = match present(cols[8]) {
            Some(raw) => Attributes::parse_with(raw, self.dialect)?,
            None => Attributes::new(),
        };

        Ok(Feature {
            seqid: cols[0].to_string(),
            source: cols[1].to_string(),
            feature_type: cols[2].to_string(),
            start,
            end,
            score,
            strand,
            phase,
            attributes,
        })
    }
}

/// Parse a single GFF3 record line with the default parser
pub fn parse_record(line: &str) -> ParseResult<Feature> {
    RecordParser::new().parse(line)
}

/// Map the `.` absence sentinel to None before type conversion
fn present(col: &str) -> Option<&str> {
    if col == "." {
        None
    } else {
        Some(col)
    }
}

fn parse_u64(col: &str, field: &'static str) -> ParseResult<Option<u64>> {
    match present(col) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ParseError::field(field, raw)),
        None => Ok(None),
    }
}

/// Split a line into exactly 9 tab-separated columns.
///
/// Tab boundaries are located with memchr; tabs are ASCII so the byte
/// offsets are always valid `str` slice boundaries.
fn split_columns(line: &str) -> ParseResult<[&str; COLUMN_COUNT]> {
    let bytes = line.as_bytes();
    let mut cols = [""; COLUMN_COUNT];
    let mut found = 0;
    let mut field_start = 0;

    loop {
        let field_end = match memchr(b'\t', &bytes[field_start..]) {
            Some(offset) => field_start + offset,
            None => bytes.len(),
        };
        if found < COLUMN_COUNT {
            cols[found] = &line[field_start..field_end];
        }
        found += 1;
        if field_end == bytes.len() {
            break;
        }
        field_start = field_end + 1;
    }

    if found != COLUMN_COUNT {
        return Err(ParseError::ColumnCount { found });
    }
    Ok(cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "Chr1\tTAIR10\tgene\t3631\t5899\t1.1\t+\t0\tID=AT1G01010;Name=AT1G01010";

    #[test]
    fn test_parse_valid_record() {
        let feature = parse_record(VALID).unwrap();

        assert_eq!(feature.seqid, "Chr1");
        assert_eq!(feature.source, "TAIR10");
        assert_eq!(feature.feature_type, "gene");
        assert_eq!(feature.start, Some(3631));
        assert_eq!(feature.end, Some(5899));
        assert_eq!(feature.score, Some(1.1));
        assert_eq!(feature.strand, Some(Strand::Forward));
        assert_eq!(feature.phase, Some(0));
        assert_eq!(feature.attributes.get("ID"), Some("AT1G01010"));
        assert_eq!(feature.length(), Some(2269));
    }

    #[test]
    fn test_absent_sentinel() {
        let line = "Chr1\tTAIR10\tchromosome\t.\t.\t.\t.\t.\tID=Chr1";
        let feature = parse_record(line).unwrap();

        assert_eq!(feature.start, None);
        assert_eq!(feature.end, None);
        assert_eq!(feature.score, None);
        assert_eq!(feature.strand, None);
        assert_eq!(feature.phase, None);
        assert_eq!(feature.length(), None);
    }

    #[test]
    fn test_too_few_columns() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t+\t.";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::ColumnCount { found: 8 }
        );
    }

    #[test]
    fn test_too_many_columns() {
        let line = format!("{}\textra", VALID);
        assert_eq!(
            parse_record(&line).unwrap_err(),
            ParseError::ColumnCount { found: 10 }
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(
            parse_record("").unwrap_err(),
            ParseError::ColumnCount { found: 1 }
        );
    }

    #[test]
    fn test_invalid_start() {
        let line = "Chr1\tTAIR10\tgene\tfoo\t5899\t.\t+\t.\tID=X";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::field("start", "foo")
        );
    }

    #[test]
    fn test_invalid_end() {
        let line = "Chr1\tTAIR10\tgene\t3631\tfoo\t.\t+\t.\tID=X";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::field("end", "foo")
        );
    }

    #[test]
    fn test_invalid_score() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\thigh\t+\t.\tID=X";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::field("score", "high")
        );
    }

    #[test]
    fn test_invalid_strand() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\tx\t.\tID=X";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::field("strand", "x")
        );
    }

    #[test]
    fn test_unknown_strand_is_valid() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t?\t.\tID=X";
        assert_eq!(parse_record(line).unwrap().strand, Some(Strand::Unknown));
    }

    #[test]
    fn test_phase_out_of_range() {
        let line = "Chr1\tTAIR10\tCDS\t3631\t5899\t.\t+\t3\tID=X";
        assert_eq!(
            parse_record(line).unwrap_err(),
            ParseError::field("phase", "3")
        );
    }

    #[test]
    fn test_attribute_error_fails_record() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t+\t.\tID=X;Nonsense";
        assert!(matches!(
            parse_record(line).unwrap_err(),
            ParseError::AttributeSyntax { .. }
        ));
    }

    #[test]
    fn test_empty_attribute_column() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t+\t.\t";
        let feature = parse_record(line).unwrap();
        assert!(feature.attributes.is_empty());
    }

    #[test]
    fn test_custom_dialect_parser() {
        use crate::core::attributes::Dialect;

        let dialect = Dialect {
            key_value_separator: ':',
        };
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t+\t.\tID:X;Parent:Chr1";
        let feature = RecordParser::with_dialect(dialect).parse(line).unwrap();
        assert_eq!(feature.id(), Some("X"));
    }

    #[test]
    fn test_dot_attribute_column() {
        let line = "Chr1\tTAIR10\tgene\t3631\t5899\t.\t+\t.\t.";
        let feature = parse_record(line).unwrap();
        assert!(feature.attributes.is_empty());
    }
}
