//! PDF text extraction collaborator.

use crate::error::Result;

/// Extract plain text from PDF bytes.
///
/// Thin wrapper over `pdf-extract`; its errors surface unchanged as
/// [`crate::Error::TextExtract`].
pub fn extract_pdf_text(data: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(data)?;
    Ok(text)
}
