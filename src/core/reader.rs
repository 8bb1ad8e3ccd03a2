//! GFF3 record stream reading
//!
//! Iterates a text source line by line, skipping comment lines and
//! yielding parsed [`Feature`]s. Parse failures are yielded per element
//! with their 1-based line number so callers choose whether to skip or
//! abort; nothing is silently dropped.
//!
//! Files opened by path are transparently decompressed:
//! - .gz extension or gzip magic bytes (1f 8b)
//! - .bz2 extension or bzip2 magic bytes (42 5a 68)
//! - Plain text otherwise

use crate::core::error::{GffError, Result};
use crate::core::feature::Feature;
use crate::core::parser::RecordParser;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Buffer size for file-backed readers (128KB)
const BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file extension or magic bytes
pub fn detect_compression(path: &Path) -> std::io::Result<CompressionFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        // BZ2 magic: "BZh"
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Lazy, forward-only reader over a GFF3 text source.
///
/// Lines whose first character is `#` (both `##` directives and plain
/// comments) are skipped without reaching the parser. Every other line,
/// blank lines included, is parsed and yielded in source order.
///
/// The reader owns its source exclusively; independent readers over
/// independent sources do not interfere.
pub struct Reader<R> {
    reader: R,
    parser: RecordParser,
    buffer: String,
    line_number: usize,
    comment_lines: usize,
    finished: bool,
}

impl<R: BufRead> Reader<R> {
    /// Wrap any buffered text source
    pub fn new(reader: R) -> Self {
        Self::with_parser(reader, RecordParser::new())
    }

    /// Wrap a source, parsing records with a non-default parser
    pub fn with_parser(reader: R, parser: RecordParser) -> Self {
        Self {
            reader,
            parser,
            buffer: String::with_capacity(1024),
            line_number: 0,
            comment_lines: 0,
            finished: false,
        }
    }

    /// Number of comment lines skipped so far
    pub fn comment_lines(&self) -> usize {
        self.comment_lines
    }
}

impl<'a> Reader<&'a [u8]> {
    /// Read records from an in-memory buffer (for testing)
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl Reader<Box<dyn BufRead>> {
    /// Open a GFF3 file, transparently decoding gzip or bzip2 content
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = detect_compression(path)?;
        let file = File::open(path)?;

        let reader: Box<dyn BufRead> = match format {
            CompressionFormat::Gzip => {
                let decoder = flate2::read::GzDecoder::new(file);
                Box::new(BufReader::with_capacity(BUFFER_SIZE, decoder))
            }
            CompressionFormat::Bzip2 => {
                let decoder = bzip2::read::BzDecoder::new(file);
                Box::new(BufReader::with_capacity(BUFFER_SIZE, decoder))
            }
            CompressionFormat::Plain => Box::new(BufReader::with_capacity(BUFFER_SIZE, file)),
        };

        Ok(Self::new(reader))
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Feature>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    if !self.finished {
                        self.finished = true;
                        if self.comment_lines > 0 {
                            debug!(
                                "skipped {} comment lines in {} total",
                                self.comment_lines, self.line_number
                            );
                        }
                    }
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.buffer.trim_end_matches(['\n', '\r']);
                    if line.starts_with('#') {
                        self.comment_lines += 1;
                        continue;
                    }
                    let result = self.parser.parse(line).map_err(|source| GffError::Parse {
                        line: self.line_number,
                        source,
                    });
                    return Some(result);
                }
                Err(e) => return Some(Err(GffError::Io(e))),
            }
        }
    }
}

/// Read and parse every record in a GFF3 file, failing on the first
/// malformed record. Lenient callers iterate a [`Reader`] themselves and
/// decide per element.
pub fn read_features<P: AsRef<Path>>(path: P) -> Result<Vec<Feature>> {
    Reader::from_path(path)?.collect()
}
