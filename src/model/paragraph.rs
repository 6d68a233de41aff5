//! Paragraph and role types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single non-empty paragraph of the input filing.
///
/// The position is stable across the pipeline and is used to correlate
/// reviewer overrides with paragraphs; it carries no semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Zero-based position in the segmented sequence
    pub index: usize,

    /// Trimmed paragraph text, never empty
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph at the given position.
    ///
    /// The text is trimmed; callers are expected to have filtered out
    /// blank lines already (the segmenter does).
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into().trim().to_string(),
        }
    }
}

/// Semantic role of a paragraph within a legal filing.
///
/// A closed five-member set; every paragraph carries exactly one role
/// before assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary body text ("Corpo")
    Body,
    /// Verbatim quotation, typically of statute or precedent ("Citação")
    Quotation,
    /// Section or document title ("Título")
    Title,
    /// Court addressing line ("Endereçamento")
    Addressing,
    /// The closing requests section ("Pedidos")
    Petition,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 5] = [
        Role::Body,
        Role::Quotation,
        Role::Title,
        Role::Addressing,
        Role::Petition,
    ];

    /// Lowercase English identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Body => "body",
            Role::Quotation => "quotation",
            Role::Title => "title",
            Role::Addressing => "addressing",
            Role::Petition => "petition",
        }
    }

    /// Label used by the original Brazilian petition workflow.
    pub fn label_pt(&self) -> &'static str {
        match self {
            Role::Body => "Corpo",
            Role::Quotation => "Citação",
            Role::Title => "Título",
            Role::Addressing => "Endereçamento",
            Role::Petition => "Pedidos",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parse a role name, accepting both the English identifiers and the
    /// Portuguese labels (case-insensitive, accents required).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "body" | "corpo" => Ok(Role::Body),
            "quotation" | "citação" | "citacao" => Ok(Role::Quotation),
            "title" | "título" | "titulo" => Ok(Role::Title),
            "addressing" | "endereçamento" | "enderecamento" => Ok(Role::Addressing),
            "petition" | "pedidos" => Ok(Role::Petition),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Role assignment for one paragraph.
///
/// Tracks the classifier's suggestion and an optional reviewer override
/// separately, so it is always clear which value is authoritative. The
/// assembler consumes [`RoleAssignment::final_role`] exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Role suggested by the classifier
    pub suggested: Role,

    /// Reviewer override, preserved verbatim and never re-derived
    pub overridden: Option<Role>,
}

impl RoleAssignment {
    /// Wrap a classifier suggestion with no override.
    pub fn suggested(role: Role) -> Self {
        Self {
            suggested: role,
            overridden: None,
        }
    }

    /// Record a reviewer override. Later overrides replace earlier ones.
    pub fn override_with(&mut self, role: Role) {
        self.overridden = Some(role);
    }

    /// Whether a reviewer has overridden the suggestion.
    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }

    /// The authoritative role: the override if present, else the suggestion.
    pub fn final_role(&self) -> Role {
        self.overridden.unwrap_or(self.suggested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_trims() {
        let p = Paragraph::new(3, "  Excelentíssimo Juiz  ");
        assert_eq!(p.index, 3);
        assert_eq!(p.text, "Excelentíssimo Juiz");
    }

    #[test]
    fn test_role_parse_english_and_portuguese() {
        assert_eq!("title".parse::<Role>().unwrap(), Role::Title);
        assert_eq!("Citação".parse::<Role>().unwrap(), Role::Quotation);
        assert_eq!("PEDIDOS".parse::<Role>().unwrap(), Role::Petition);
        assert_eq!("enderecamento".parse::<Role>().unwrap(), Role::Addressing);
        assert!("heading".parse::<Role>().is_err());
    }

    #[test]
    fn test_assignment_override_is_authoritative() {
        let mut a = RoleAssignment::suggested(Role::Body);
        assert_eq!(a.final_role(), Role::Body);
        assert!(!a.is_overridden());

        a.override_with(Role::Title);
        assert!(a.is_overridden());
        assert_eq!(a.final_role(), Role::Title);
        // The suggestion is preserved, not rewritten.
        assert_eq!(a.suggested, Role::Body);
    }
}
