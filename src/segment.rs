//! Paragraph segmentation.
//!
//! Splits an extracted text blob into an ordered sequence of non-empty
//! paragraphs on line-break boundaries. Blank lines terminate paragraphs
//! but never join them; there is no merging and no length limit.

use crate::model::Paragraph;

/// Segment a text blob into paragraphs.
///
/// Lazy and restartable: the iterator borrows the input and can be
/// rebuilt by calling again. The `index` of each paragraph is its
/// position among the non-blank lines, so the output ordering always
/// matches the input ordering. Empty input yields an empty sequence,
/// which is valid, not an error.
pub fn segment(text: &str) -> impl Iterator<Item = Paragraph> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| Paragraph::new(index, line))
}

/// Count the paragraphs `segment` would yield, without allocating them.
pub fn paragraph_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
