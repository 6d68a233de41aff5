//! JSON rendering of the styled-paragraph list.

use crate::assemble::StyledParagraph;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a styled-paragraph list to JSON.
pub fn to_json(paragraphs: &[StyledParagraph], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(paragraphs),
        JsonFormat::Compact => serde_json::to_string(paragraphs),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
