//! Formatting specifications and the static style rule table.

use crate::model::Role;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serif family applied to every run, process-wide.
pub const FONT_FAMILY: &str = "Times New Roman";

/// Paragraph alignment.
///
/// Only the two alignments the rule table uses; this is not a general
/// word-processing alignment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Justified to both margins
    Justify,
    /// Centered
    Center,
}

/// Fully-specified formatting attributes for one role.
///
/// Immutable once built; `None` means the attribute is left unset in the
/// output document rather than zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Paragraph alignment
    pub alignment: Alignment,

    /// Font size in points
    pub font_size_pt: f32,

    /// Exact line spacing in points, if set
    pub line_spacing_pt: Option<f32>,

    /// Left indent in centimeters, if set
    pub left_indent_cm: Option<f32>,

    /// First-line indent in centimeters, if set
    pub first_line_indent_cm: Option<f32>,

    /// Space after the paragraph in points
    pub space_after_pt: f32,
}

/// Page margins applied once per document by the DOCX backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin in centimeters
    pub top_cm: f32,
    /// Bottom margin in centimeters
    pub bottom_cm: f32,
    /// Left margin in centimeters
    pub left_cm: f32,
    /// Right margin in centimeters
    pub right_cm: f32,
}

/// Fixed ABNT petition margins: top 3cm, bottom 2cm, left 3cm, right 2cm.
pub const PAGE_MARGINS: PageMargins = PageMargins {
    top_cm: 3.0,
    bottom_cm: 2.0,
    left_cm: 3.0,
    right_cm: 2.0,
};

/// The style rule table: one `StyleSpec` per role.
///
/// Built once at first use and read-only thereafter, so concurrent lookups
/// from parallel classification are safe.
static STYLE_RULES: Lazy<HashMap<Role, StyleSpec>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    rules.insert(
        Role::Body,
        StyleSpec {
            alignment: Alignment::Justify,
            font_size_pt: 12.0,
            line_spacing_pt: Some(18.0),
            left_indent_cm: None,
            first_line_indent_cm: Some(1.25),
            space_after_pt: 6.0,
        },
    );
    rules.insert(
        Role::Quotation,
        StyleSpec {
            alignment: Alignment::Justify,
            font_size_pt: 10.0,
            line_spacing_pt: Some(12.0),
            left_indent_cm: Some(4.0),
            first_line_indent_cm: None,
            space_after_pt: 6.0,
        },
    );
    rules.insert(
        Role::Title,
        StyleSpec {
            alignment: Alignment::Center,
            font_size_pt: 12.0,
            line_spacing_pt: None,
            left_indent_cm: None,
            first_line_indent_cm: None,
            space_after_pt: 6.0,
        },
    );
    rules.insert(
        Role::Addressing,
        StyleSpec {
            alignment: Alignment::Justify,
            font_size_pt: 12.0,
            line_spacing_pt: Some(18.0),
            left_indent_cm: None,
            first_line_indent_cm: None,
            space_after_pt: 6.0,
        },
    );
    rules.insert(
        Role::Petition,
        StyleSpec {
            alignment: Alignment::Justify,
            font_size_pt: 12.0,
            line_spacing_pt: Some(18.0),
            left_indent_cm: None,
            first_line_indent_cm: Some(1.25),
            space_after_pt: 6.0,
        },
    );
    rules
});

/// Look up the style rule for a role.
///
/// Returns `None` only if a role has no table entry, which the built-in
/// table never produces; the assembler turns that case into
/// [`crate::Error::MissingStyle`].
pub fn style_for(role: Role) -> Option<&'static StyleSpec> {
    STYLE_RULES.get(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_rule() {
        for role in Role::ALL {
            assert!(style_for(role).is_some(), "missing rule for {role}");
        }
    }

    #[test]
    fn test_quotation_rule() {
        let spec = style_for(Role::Quotation).unwrap();
        assert_eq!(spec.alignment, Alignment::Justify);
        assert_eq!(spec.font_size_pt, 10.0);
        assert_eq!(spec.line_spacing_pt, Some(12.0));
        assert_eq!(spec.left_indent_cm, Some(4.0));
        assert_eq!(spec.first_line_indent_cm, None);
        assert_eq!(spec.space_after_pt, 6.0);
    }

    #[test]
    fn test_title_rule() {
        let spec = style_for(Role::Title).unwrap();
        assert_eq!(spec.alignment, Alignment::Center);
        assert_eq!(spec.font_size_pt, 12.0);
        assert_eq!(spec.line_spacing_pt, None);
        assert_eq!(spec.space_after_pt, 6.0);
    }

    #[test]
    fn test_body_and_petition_share_indent() {
        let body = style_for(Role::Body).unwrap();
        let petition = style_for(Role::Petition).unwrap();
        assert_eq!(body.first_line_indent_cm, Some(1.25));
        assert_eq!(petition.first_line_indent_cm, Some(1.25));
        assert_eq!(body.line_spacing_pt, Some(18.0));
    }

    #[test]
    fn test_addressing_has_no_indents() {
        let spec = style_for(Role::Addressing).unwrap();
        assert_eq!(spec.left_indent_cm, None);
        assert_eq!(spec.first_line_indent_cm, None);
    }
}
