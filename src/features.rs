//! Shallow linguistic feature extraction.
//!
//! Computes the small feature set the role classifier consumes. All
//! derivations are pure, deterministic, and total over any Unicode
//! string; unsupported or empty text simply yields all-false features.

use serde::{Deserialize, Serialize};

/// Double-quote glyphs that count as quotation marks.
///
/// Covers the straight ASCII quote and the curly pair, so extracted text
/// keeps its quotation signal regardless of which glyph the source
/// editor emitted.
const QUOTE_GLYPHS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Features derived from one paragraph's text.
///
/// Ephemeral: recomputed on demand, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Every alphabetic character is uppercase, and at least one exists
    pub is_all_uppercase: bool,

    /// Text contains a straight or curly double-quote glyph
    pub contains_quote_glyph: bool,

    /// Count of whitespace-delimited tokens after trimming
    pub word_count: usize,

    /// Trimmed text ends with a colon
    pub ends_with_colon: bool,
}

impl FeatureSet {
    /// Extract features from a paragraph's text.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        let mut has_alpha = false;
        let mut all_upper = true;
        for c in trimmed.chars() {
            if c.is_alphabetic() {
                has_alpha = true;
                if !c.is_uppercase() {
                    all_upper = false;
                    break;
                }
            }
        }

        Self {
            is_all_uppercase: has_alpha && all_upper,
            contains_quote_glyph: trimmed.chars().any(|c| QUOTE_GLYPHS.contains(&c)),
            word_count: trimmed.split_whitespace().count(),
            ends_with_colon: trimmed.ends_with(':'),
        }
    }
}
