//! # petiform
//!
//! Paragraph classification and ABNT-style formatting for Brazilian
//! legal filings.
//!
//! The library takes a plain-text, PDF, or DOCX filing, segments it into
//! paragraphs, suggests one of five semantic roles per paragraph from
//! shallow linguistic signals, lets a reviewer override any suggestion,
//! and resolves each role through a fixed style rule table into a fully
//! specified styled-paragraph list for a rendering backend.
//!
//! ## Quick Start
//!
//! ```no_run
//! use petiform::Petiform;
//!
//! fn main() -> petiform::Result<()> {
//!     Petiform::new()
//!         .with_title("Petição Trabalhista")
//!         .format("peticao.txt")?
//!         .to_docx_file("peticao.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! raw bytes → extraction → segmentation → feature extraction →
//! classification → optional reviewer override → assembly →
//! DOCX / text preview / JSON.

pub mod assemble;
pub mod classify;
pub mod detect;
pub mod error;
pub mod extract;
pub mod features;
pub mod model;
pub mod options;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use assemble::{assemble, StyledParagraph};
pub use classify::{classify, suggest_role};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use extract::{extract_text_from_bytes, extract_text_from_path};
pub use features::FeatureSet;
pub use model::{
    style_for, Alignment, PageMargins, Paragraph, Role, RoleAssignment, StyleSpec, FONT_FAMILY,
    PAGE_MARGINS,
};
pub use options::{DocxOptions, FormatOptions};
pub use render::JsonFormat;

use rayon::prelude::*;
use std::path::Path;

/// Segment a text blob and suggest a role for every paragraph.
///
/// Overrides from `options` are applied on top of the suggestions; an
/// override addressing a position past the end of the sequence is
/// ignored with a warning. Classification is per paragraph with no
/// cross-paragraph dependency, so the parallel path preserves order.
pub fn classify_text(
    text: &str,
    options: &FormatOptions,
) -> Vec<(Paragraph, RoleAssignment)> {
    let paragraphs: Vec<Paragraph> = segment::segment(text).collect();
    log::debug!("segmented {} paragraph(s)", paragraphs.len());

    let mut assignments: Vec<RoleAssignment> = if options.parallel {
        paragraphs
            .par_iter()
            .map(|p| RoleAssignment::suggested(suggest_role(&p.text)))
            .collect()
    } else {
        paragraphs
            .iter()
            .map(|p| RoleAssignment::suggested(suggest_role(&p.text)))
            .collect()
    };

    for (&index, &role) in &options.overrides {
        match assignments.get_mut(index) {
            Some(assignment) => assignment.override_with(role),
            None => log::warn!(
                "override for paragraph {index} ignored: only {} paragraph(s)",
                assignments.len()
            ),
        }
    }

    paragraphs.into_iter().zip(assignments).collect()
}

/// Run the full core pipeline on an extracted text blob.
///
/// The output sequence has exactly one styled paragraph per non-blank
/// input line, in input order; an empty or all-blank blob yields an
/// empty list, not an error.
pub fn format_text(text: &str, options: &FormatOptions) -> Result<Vec<StyledParagraph>> {
    let classified = classify_text(text, options);
    assemble(
        classified
            .into_iter()
            .map(|(paragraph, assignment)| (paragraph, assignment.final_role())),
    )
}

/// Extract text from a file (sniffing plain text / PDF / DOCX) and run
/// the pipeline on it.
pub fn format_file<P: AsRef<Path>>(
    path: P,
    options: &FormatOptions,
) -> Result<Vec<StyledParagraph>> {
    let text = extract_text_from_path(path)?;
    format_text(&text, options)
}

/// Builder for the whole extract–classify–render flow.
///
/// # Example
///
/// ```no_run
/// use petiform::{JsonFormat, Petiform, Role};
///
/// let result = Petiform::new()
///     .sequential()
///     .with_override(0, Role::Title)
///     .format("peticao.pdf")?;
/// let json = result.to_json(JsonFormat::Pretty)?;
/// # Ok::<(), petiform::Error>(())
/// ```
pub struct Petiform {
    format_options: FormatOptions,
    docx_options: DocxOptions,
}

impl Petiform {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            format_options: FormatOptions::default(),
            docx_options: DocxOptions::default(),
        }
    }

    /// Disable parallel classification.
    pub fn sequential(mut self) -> Self {
        self.format_options = self.format_options.sequential();
        self
    }

    /// Override the role of the paragraph at the given zero-based index.
    pub fn with_override(mut self, index: usize, role: Role) -> Self {
        self.format_options = self.format_options.with_override(index, role);
        self
    }

    /// Set the DOCX document heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.docx_options = self.docx_options.with_title(title);
        self
    }

    /// Emit no DOCX document heading.
    pub fn without_title(mut self) -> Self {
        self.docx_options = self.docx_options.without_title();
        self
    }

    /// Extract and format a file.
    pub fn format<P: AsRef<Path>>(self, path: P) -> Result<PetiformResult> {
        let paragraphs = format_file(path, &self.format_options)?;
        Ok(PetiformResult {
            paragraphs,
            docx_options: self.docx_options,
        })
    }

    /// Extract and format raw input bytes.
    pub fn format_bytes(self, data: &[u8]) -> Result<PetiformResult> {
        let text = extract_text_from_bytes(data)?;
        let paragraphs = format_text(&text, &self.format_options)?;
        Ok(PetiformResult {
            paragraphs,
            docx_options: self.docx_options,
        })
    }

    /// Format an already-extracted text blob.
    pub fn format_text(self, text: &str) -> Result<PetiformResult> {
        let paragraphs = format_text(text, &self.format_options)?;
        Ok(PetiformResult {
            paragraphs,
            docx_options: self.docx_options,
        })
    }
}

impl Default for Petiform {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of running the pipeline, ready for rendering.
pub struct PetiformResult {
    /// The styled-paragraph list
    pub paragraphs: Vec<StyledParagraph>,
    docx_options: DocxOptions,
}

impl PetiformResult {
    /// Write the document as DOCX.
    pub fn to_docx_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::to_docx_file(&self.paragraphs, &self.docx_options, path)
    }

    /// Render a plain-text preview.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.paragraphs)
    }

    /// Render the styled-paragraph list as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.paragraphs, format)
    }

    /// The styled paragraphs.
    pub fn paragraphs(&self) -> &[StyledParagraph] {
        &self.paragraphs
    }
}
