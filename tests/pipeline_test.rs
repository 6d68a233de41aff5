//! End-to-end tests for the classification and formatting pipeline.

use petiform::{
    assemble, classify_text, format_text, segment, suggest_role, Alignment, FormatOptions,
    Paragraph, Role,
};

const FILING: &str = "\
EXMO. SR. DR. JUIZ DE DIREITO

PETIÇÃO INICIAL

Fulano de Tal, brasileiro, casado, vem respeitosamente perante Vossa Excelência propor a presente ação.
Segundo o artigo citado, \u{201C}a parte lesada poderá exigir reparação integral\u{201D}.
Dos fatos:
Diante de todo o exposto, requer-se a total procedência dos pedidos abaixo elencados:
";

#[test]
fn segmentation_preserves_order_and_count() {
    let non_blank = FILING.lines().filter(|l| !l.trim().is_empty()).count();
    let paragraphs: Vec<Paragraph> = segment::segment(FILING).collect();
    assert_eq!(paragraphs.len(), non_blank);
    for (i, p) in paragraphs.iter().enumerate() {
        assert_eq!(p.index, i);
        assert!(!p.text.is_empty());
    }
}

#[test]
fn end_to_end_roles_and_styles() {
    let styled = format_text(FILING, &FormatOptions::default()).unwrap();
    assert_eq!(styled.len(), 6);

    // "EXMO. SR. DR. JUIZ DE DIREITO": all caps wins before the word-count rule.
    assert_eq!(styled[0].role, Role::Title);
    assert_eq!(styled[1].role, Role::Title);
    assert_eq!(styled[1].style.alignment, Alignment::Center);
    assert_eq!(styled[1].style.line_spacing_pt, None);

    assert_eq!(styled[2].role, Role::Body);
    assert_eq!(styled[2].style.first_line_indent_cm, Some(1.25));
    assert_eq!(styled[2].style.line_spacing_pt, Some(18.0));

    // Curly quotes count as quotation glyphs.
    assert_eq!(styled[3].role, Role::Quotation);
    assert_eq!(styled[3].style.font_size_pt, 10.0);
    assert_eq!(styled[3].style.left_indent_cm, Some(4.0));

    assert_eq!(styled[4].role, Role::Addressing);
    assert_eq!(styled[5].role, Role::Petition);

    for p in &styled {
        assert_eq!(p.style.space_after_pt, 6.0);
    }
}

#[test]
fn assembly_is_idempotent() {
    let pairs: Vec<(Paragraph, Role)> = classify_text(FILING, &FormatOptions::default())
        .into_iter()
        .map(|(p, a)| (p, a.final_role()))
        .collect();
    let first = assemble(pairs.clone()).unwrap();
    let second = assemble(pairs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn classification_is_total_over_arbitrary_strings() {
    let inputs = [
        "",
        " ",
        ":",
        "\u{FFFD}",
        "palavras sem nenhum sinal especial em quantidade suficiente",
        "UM DOIS TRÊS QUATRO CINCO SEIS SETE",
        "linha \u{201C}com aspas\u{201D} e mais de cinco palavras presentes:",
    ];
    for text in inputs {
        // Never panics, always one of the five roles.
        let role = suggest_role(text);
        assert!(Role::ALL.contains(&role));
    }
}

#[test]
fn precedence_title_beats_quotation() {
    assert_eq!(suggest_role("\"HELLO\""), Role::Title);
}

// The word-count rule fires before the colon rule, so short colon-terminated
// headings classify as Addressing, never Petition. Deliberate: the ordering
// is part of the contract.
#[test]
fn precedence_short_colon_heading_is_addressing() {
    assert_eq!(suggest_role("Dos pedidos:"), Role::Addressing);
    assert_eq!(suggest_role("Diante do exposto, requer-se:"), Role::Addressing);
}

#[test]
fn quotation_beats_colon_and_count() {
    assert_eq!(
        suggest_role("ele disse \"sim\" e nada mais:"),
        Role::Quotation
    );
}

#[test]
fn overrides_survive_reassembly_verbatim() {
    let options = FormatOptions::new()
        .sequential()
        .with_override(0, Role::Addressing)
        .with_override(5, Role::Body);
    let classified = classify_text(FILING, &options);

    assert!(classified[0].1.is_overridden());
    assert_eq!(classified[0].1.suggested, Role::Title);
    assert_eq!(classified[0].1.final_role(), Role::Addressing);
    assert_eq!(classified[5].1.final_role(), Role::Body);

    let styled = format_text(FILING, &options).unwrap();
    assert_eq!(styled[0].role, Role::Addressing);
    assert_eq!(styled[5].role, Role::Body);
}
