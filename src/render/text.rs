//! Plain-text preview rendering.
//!
//! The review surface the original workflow showed before generating the
//! document: role label, paragraph text, separator.

use crate::assemble::StyledParagraph;
use crate::error::Result;

/// Render a styled-paragraph list as a reviewable plain-text preview.
pub fn to_text(paragraphs: &[StyledParagraph]) -> Result<String> {
    let mut out = String::new();
    for styled in paragraphs {
        out.push_str(&format!("[{}]\n", styled.role.label_pt()));
        out.push_str(&styled.text);
        out.push_str("\n---\n");
    }
    Ok(out)
}
