//! Pipeline options and configuration.

use crate::model::Role;
use std::collections::HashMap;

/// Options for the classification pipeline.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Whether to classify paragraphs in parallel
    pub parallel: bool,

    /// Reviewer role overrides, keyed by zero-based paragraph index.
    /// Overrides are applied verbatim after classification; indexes with
    /// no matching paragraph are ignored with a warning.
    pub overrides: HashMap<usize, Role>,
}

impl FormatOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable parallel classification.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Override the role of the paragraph at the given zero-based index.
    pub fn with_override(mut self, index: usize, role: Role) -> Self {
        self.overrides.insert(index, role);
        self
    }

    /// Replace the whole override map.
    pub fn with_overrides(mut self, overrides: HashMap<usize, Role>) -> Self {
        self.overrides = overrides;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            overrides: HashMap::new(),
        }
    }
}

/// Options for the DOCX output backend.
#[derive(Debug, Clone)]
pub struct DocxOptions {
    /// Document heading placed before the body, or `None` for no heading
    pub title: Option<String>,
}

impl DocxOptions {
    /// Create options with the default "Petição" heading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Emit no document heading.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title: Some("Petição".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_builder() {
        let options = FormatOptions::new()
            .sequential()
            .with_override(2, Role::Title);
        assert!(!options.parallel);
        assert_eq!(options.overrides.get(&2), Some(&Role::Title));
    }

    #[test]
    fn test_docx_options_default_title() {
        assert_eq!(DocxOptions::default().title.as_deref(), Some("Petição"));
        assert_eq!(DocxOptions::new().without_title().title, None);
        assert_eq!(
            DocxOptions::new().with_title("Contestação").title.as_deref(),
            Some("Contestação")
        );
    }
}
