//! The two-column (Category, Value) table model.
//!
//! A [`ResourceTable`] is the shared display surface the table viewer
//! writes into. Re-rendering replaces the header and body wholesale;
//! rows never accumulate across triggers.

use crate::render::Node;

/// Header labels for the two columns.
pub const TABLE_HEADER: [&str; 2] = ["Category", "Value"];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// The Category cell: the humanized field name.
    pub category: String,
    /// The Value cell: the rendered node.
    pub value: Node,
}

impl TableRow {
    /// Creates a row.
    pub fn new(category: impl Into<String>, value: Node) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// The rendered table.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    header: Vec<String>,
    rows: Vec<TableRow>,
}

impl ResourceTable {
    /// Creates an empty, headerless table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table contents with a new header and rows.
    ///
    /// Any previously rendered header and body are discarded first.
    pub fn render(&mut self, rows: Vec<TableRow>) {
        self.header.clear();
        self.rows.clear();

        self.header
            .extend(TABLE_HEADER.iter().map(|h| (*h).to_string()));
        self.rows = rows;
    }

    /// Returns the header cells, empty before the first render.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the body rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Returns true if nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
