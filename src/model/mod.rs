//! Document model types for filing paragraphs and their styling.
//!
//! The model is the intermediate representation between raw extracted
//! text and the output backends: paragraphs, their semantic roles, and
//! the fixed style rules those roles resolve to.

mod paragraph;
mod style;

pub use paragraph::{Paragraph, Role, RoleAssignment};
pub use style::{style_for, Alignment, PageMargins, StyleSpec, FONT_FAMILY, PAGE_MARGINS};
