//! Error types for the petiform library.

use crate::model::Role;
use std::io;
use thiserror::Error;

/// Result type alias for petiform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a filing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are neither PDF, DOCX, nor UTF-8 plain text.
    #[error("Unknown input format: not plain text, PDF, or DOCX")]
    UnknownFormat,

    /// Input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error extracting text from a PDF container.
    #[error("PDF text extraction error: {0}")]
    TextExtract(String),

    /// Error extracting text from a DOCX container.
    #[error("DOCX extraction error: {0}")]
    DocxExtract(String),

    /// A role has no entry in the style rule table.
    ///
    /// Cannot occur with the built-in five-role table; kept so the
    /// assembler contract stays honest if the role set grows.
    #[error("No style rule registered for role: {0}")]
    MissingStyle(Role),

    /// Error building the output DOCX document.
    #[error("DOCX build error: {0}")]
    Docx(#[from] docx_rs::DocxError),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::DocxExtract(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocxExtract(err.to_string())
    }
}
