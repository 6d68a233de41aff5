//! Input format detection.
//!
//! Sniffs the container of an uploaded filing before extraction: PDF and
//! DOCX by magic bytes, anything else that decodes as UTF-8 is treated
//! as plain text.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local-file-header magic; DOCX is a ZIP container.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detected input container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// UTF-8 plain text
    PlainText,
    /// PDF container
    Pdf,
    /// DOCX (OOXML/ZIP) container
    Docx,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::PlainText => write!(f, "plain text"),
            InputFormat::Pdf => write!(f, "PDF"),
            InputFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// Detect the input format from leading bytes.
///
/// The plain-text check only validates the given prefix, so callers
/// holding a whole file should pass the whole file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(InputFormat::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(InputFormat::Docx);
    }
    if std::str::from_utf8(data).is_ok() {
        return Ok(InputFormat::PlainText);
    }
    Err(Error::UnknownFormat)
}

/// Detect the input format of a file on disk.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    detect_format_from_bytes(&data)
}
