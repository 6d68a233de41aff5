//! Text extraction boundary.
//!
//! Turns an uploaded PDF, DOCX, or plain-text file into the single UTF-8
//! blob the core pipeline consumes. Collaborator failures (the PDF or
//! DOCX extractor) are surfaced unchanged; nothing here retries.

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Extract and normalize text from raw input bytes, sniffing the format.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    let format = detect_format_from_bytes(data)?;
    log::debug!("detected input format: {format}");
    let raw = match format {
        InputFormat::PlainText => String::from_utf8(data.to_vec())
            .map_err(|e| Error::Encoding(e.to_string()))?,
        InputFormat::Pdf => extract_pdf_text(data)?,
        InputFormat::Docx => extract_docx_text(data)?,
    };
    Ok(normalize(&raw))
}

/// Extract and normalize text from a file on disk.
pub fn extract_text_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = std::fs::read(path)?;
    extract_text_from_bytes(&data)
}

/// Normalize an extracted blob before segmentation: strip a leading BOM,
/// apply Unicode NFC so equivalent glyph encodings compare equal, and
/// fold CRLF line endings to LF.
pub fn normalize(text: &str) -> String {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.nfc().collect::<String>().replace("\r\n", "\n")
}
