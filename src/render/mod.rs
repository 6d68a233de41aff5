//! Rendering backends for the styled-paragraph list.

mod docx;
mod json;
mod text;

pub use docx::{to_docx_file, write_docx};
pub use json::{to_json, JsonFormat};
pub use text::to_text;
