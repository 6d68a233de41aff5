//! Role classification.
//!
//! A single pure total function from a [`FeatureSet`] to a [`Role`].
//! The branches form an ordered decision chain and the order is load
//! bearing: the categories are not mutually exclusive by feature alone,
//! so the first matching rule wins.

use crate::features::FeatureSet;
use crate::model::Role;

/// Classify a feature set into exactly one role.
///
/// Precedence, first match wins:
/// 1. all-uppercase → [`Role::Title`]
/// 2. contains a double-quote glyph → [`Role::Quotation`]
/// 3. at most five words → [`Role::Addressing`]
/// 4. ends with a colon → [`Role::Petition`]
/// 5. otherwise → [`Role::Body`]
///
/// Note that rule 3 fires before rule 4, so a short colon-terminated
/// phrase classifies as Addressing, never Petition.
pub fn classify(features: &FeatureSet) -> Role {
    if features.is_all_uppercase {
        Role::Title
    } else if features.contains_quote_glyph {
        Role::Quotation
    } else if features.word_count <= 5 {
        Role::Addressing
    } else if features.ends_with_colon {
        Role::Petition
    } else {
        Role::Body
    }
}

/// Convenience: extract features from raw text and classify in one step.
pub fn suggest_role(text: &str) -> Role {
    classify(&FeatureSet::from_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(suggest_role("PETIÇÃO INICIAL"), Role::Title);
    }

    #[test]
    fn test_quotation() {
        assert_eq!(
            suggest_role(r#"O contrato estabelece que "o prazo é de 30 dias"."#),
            Role::Quotation
        );
    }

    #[test]
    fn test_addressing() {
        assert_eq!(suggest_role("Excelentíssimo Juiz"), Role::Addressing);
    }

    #[test]
    fn test_petition() {
        assert_eq!(
            suggest_role("Diante de todo o exposto, requer-se a procedência dos pedidos:"),
            Role::Petition
        );
    }

    #[test]
    fn test_body_default() {
        assert_eq!(
            suggest_role("A parte autora celebrou contrato de prestação de serviços com a ré."),
            Role::Body
        );
    }

    #[test]
    fn test_uppercase_wins_over_quote() {
        // Rule 1 before rule 2.
        assert_eq!(suggest_role(r#""HELLO""#), Role::Title);
    }

    #[test]
    fn test_quote_wins_over_short() {
        assert_eq!(suggest_role(r#""citado""#), Role::Quotation);
    }

    #[test]
    fn test_short_colon_phrase_is_addressing() {
        // Rule 3 fires before rule 4 by precedence, so a colon-terminated
        // phrase of five words or fewer never reaches the Petition rule.
        // "Diante do exposto, requer-se:" is four whitespace-delimited
        // tokens and lands here.
        assert_eq!(suggest_role("Dos pedidos:"), Role::Addressing);
        assert_eq!(suggest_role("Diante do exposto, requer-se:"), Role::Addressing);
    }

    #[test]
    fn test_totality_over_odd_inputs() {
        // Every string maps to exactly one role, with no failure path.
        for text in ["", "   ", "\u{0}", "١٢٣", "🙂 🙂 🙂 🙂 🙂 🙂", "a:"] {
            let _ = suggest_role(text);
        }
        assert_eq!(suggest_role(""), Role::Addressing); // zero words ≤ 5
    }
}
