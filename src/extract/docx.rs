//! DOCX text extraction collaborator.
//!
//! Reads `word/document.xml` out of the ZIP container and collects the
//! text runs, emitting one line per `w:p` paragraph so the segmenter
//! sees the same paragraph boundaries the author wrote.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Extract plain text from DOCX bytes.
pub fn extract_docx_text(data: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| Error::DocxExtract("missing word/document.xml".to_string()))?
        .read_to_string(&mut xml)?;
    document_xml_to_text(&xml)
}

/// Collect the text of a `word/document.xml` body.
fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) if e.name().as_ref() == b"w:br" => out.push('\n'),
            Event::Text(e) if in_text_run => out.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_xml_to_text() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>PETI&#199;&#195;O INICIAL</w:t></w:r></w:p>
                <w:p><w:r><w:t>Excelent&#237;ssimo </w:t></w:r><w:r><w:t>Juiz</w:t></w:r></w:p>
                <w:p><w:r><w:t>uma linha</w:t><w:br/><w:t>outra linha</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;

        let text = document_xml_to_text(xml).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(
            lines,
            [
                "PETIÇÃO INICIAL",
                "Excelentíssimo Juiz",
                "uma linha",
                "outra linha"
            ]
        );
    }

    #[test]
    fn test_non_zip_bytes_fail() {
        let result = extract_docx_text(b"definitely not a zip archive");
        assert!(matches!(result, Err(Error::DocxExtract(_))));
    }
}
