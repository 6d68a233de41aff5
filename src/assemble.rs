//! Document assembly.
//!
//! Resolves each (paragraph, role) pair through the style rule table and
//! produces the crate's output artifact: an ordered list of fully
//! specified styled paragraphs, same length and order as the input.

use crate::error::{Error, Result};
use crate::model::{style_for, Paragraph, Role, StyleSpec};
use serde::{Deserialize, Serialize};

/// One fully-styled output paragraph, consumed by a rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledParagraph {
    /// Paragraph text
    pub text: String,

    /// Final role (after any reviewer override)
    pub role: Role,

    /// Formatting resolved from the style rule table
    pub style: StyleSpec,
}

/// Assemble styled paragraphs from (paragraph, role) pairs.
///
/// Pure transform: no paragraph is dropped, merged, or reordered, so the
/// output length always equals the input length. Fails only with
/// [`Error::MissingStyle`] when a role has no rule-table entry, which the
/// built-in five-role table cannot produce.
pub fn assemble<I>(pairs: I) -> Result<Vec<StyledParagraph>>
where
    I: IntoIterator<Item = (Paragraph, Role)>,
{
    pairs
        .into_iter()
        .map(|(paragraph, role)| {
            let style = *style_for(role).ok_or(Error::MissingStyle(role))?;
            Ok(StyledParagraph {
                text: paragraph.text,
                role,
                style,
            })
        })
        .collect()
}
