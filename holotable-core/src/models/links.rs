//! Cross-reference field configuration.
//!
//! Some record fields hold locators into sibling collections rather
//! than display values. Resolving such a locator means fetching the
//! referenced record and reading one of its fields as the link label.
//! The [`LinkTable`] maps cross-reference field names to that label
//! field. It is passed explicitly to normalization and resolution;
//! there is no process-wide mutable mapping.

/// Default cross-reference entries: (field name, label field).
///
/// Films are labeled by their `title`; everything else by `name`.
const DEFAULT_LINKS: &[(&str, &str)] = &[
    ("homeworld", "name"),
    ("films", "title"),
    ("species", "name"),
    ("starships", "name"),
    ("vehicles", "name"),
    ("residents", "name"),
    ("people", "name"),
    ("planets", "name"),
    ("characters", "name"),
    ("pilots", "name"),
];

/// Configuration table for cross-reference fields.
#[derive(Debug, Clone)]
pub struct LinkTable {
    entries: Vec<(String, String)>,
}

impl LinkTable {
    /// Creates a table from explicit (field, label field) entries.
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Returns true if the named field holds cross-reference locators.
    pub fn is_link_field(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// Returns the label field for a cross-reference field, if any.
    pub fn label_field(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, label)| label.as_str())
    }
}

impl Default for LinkTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_LINKS
                .iter()
                .map(|(field, label)| ((*field).to_string(), (*label).to_string()))
                .collect(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
