//! DOCX output backend.
//!
//! Serializes a styled-paragraph list into a Word document: fixed ABNT
//! page margins applied once, an optional centered heading, then one
//! run per paragraph with the role's resolved formatting.

use crate::assemble::StyledParagraph;
use crate::error::Result;
use crate::model::{Alignment, FONT_FAMILY, PAGE_MARGINS};
use crate::options::DocxOptions;
use docx_rs::{
    AlignmentType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph as DocxParagraph,
    Run, RunFonts, SpecialIndentType,
};
use std::io::{Seek, Write};
use std::path::Path;

/// Twentieths of a point per centimeter.
const TWIPS_PER_CM: f32 = 567.0;
/// Twentieths of a point per point.
const TWIPS_PER_PT: f32 = 20.0;

fn cm_to_twip(cm: f32) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}

fn pt_to_twip(pt: f32) -> u32 {
    (pt * TWIPS_PER_PT).round() as u32
}

/// Font sizes in OOXML are half-points.
fn pt_to_half_points(pt: f32) -> usize {
    (pt * 2.0).round() as usize
}

/// Write a DOCX document to any seekable writer.
pub fn write_docx<W: Write + Seek>(
    paragraphs: &[StyledParagraph],
    options: &DocxOptions,
    writer: W,
) -> Result<()> {
    let mut docx = Docx::new().page_margin(
        PageMargin::new()
            .top(cm_to_twip(PAGE_MARGINS.top_cm))
            .bottom(cm_to_twip(PAGE_MARGINS.bottom_cm))
            .left(cm_to_twip(PAGE_MARGINS.left_cm))
            .right(cm_to_twip(PAGE_MARGINS.right_cm)),
    );

    if let Some(ref title) = options.title {
        docx = docx.add_paragraph(heading_paragraph(title));
    }

    for styled in paragraphs {
        docx = docx.add_paragraph(docx_paragraph(styled));
    }

    log::debug!("writing DOCX with {} paragraph(s)", paragraphs.len());
    docx.build()
        .pack(writer)
        .map_err(docx_rs::DocxError::from)?;
    Ok(())
}

/// Write a DOCX document to a file path.
pub fn to_docx_file<P: AsRef<Path>>(
    paragraphs: &[StyledParagraph],
    options: &DocxOptions,
    path: P,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_docx(paragraphs, options, file)
}

/// The document heading: bold, centered, 16pt.
fn heading_paragraph(title: &str) -> DocxParagraph {
    let run = Run::new()
        .add_text(title)
        .bold()
        .size(pt_to_half_points(16.0))
        .fonts(RunFonts::new().ascii(FONT_FAMILY).hi_ansi(FONT_FAMILY));
    DocxParagraph::new()
        .add_run(run)
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().after(pt_to_twip(12.0)))
}

/// Map one styled paragraph onto a docx-rs paragraph.
fn docx_paragraph(styled: &StyledParagraph) -> DocxParagraph {
    let spec = &styled.style;

    let run = Run::new()
        .add_text(styled.text.as_str())
        .size(pt_to_half_points(spec.font_size_pt))
        .fonts(RunFonts::new().ascii(FONT_FAMILY).hi_ansi(FONT_FAMILY));

    let mut paragraph = DocxParagraph::new().add_run(run).align(match spec.alignment {
        Alignment::Justify => AlignmentType::Both,
        Alignment::Center => AlignmentType::Center,
    });

    let mut spacing = LineSpacing::new().after(pt_to_twip(spec.space_after_pt));
    if let Some(line_pt) = spec.line_spacing_pt {
        spacing = spacing
            .line_rule(LineSpacingType::Exact)
            .line(pt_to_twip(line_pt) as i32);
    }
    paragraph = paragraph.line_spacing(spacing);

    let left = spec.left_indent_cm.map(cm_to_twip);
    let first_line = spec
        .first_line_indent_cm
        .map(|cm| SpecialIndentType::FirstLine(cm_to_twip(cm)));
    if left.is_some() || first_line.is_some() {
        paragraph = paragraph.indent(left, first_line, None, None);
    }

    paragraph
}
