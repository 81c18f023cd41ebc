//! The Resource Table Viewer: the parameterized trigger controller.
//!
//! One controller serves every archive category, driven by the static
//! `CategoryConfig` table; there is no per-category type. A trigger
//! draws a random id, fetches the record through the [`RecordSource`]
//! seam, classifies each field, resolves cross-references, and builds
//! the table. Triggers are serialized per call: each pipeline runs to
//! completion before its table is returned, so two triggers never
//! interleave writes.

use rand::Rng;
use tracing::{debug, info, instrument};

use holotable_core::{
    classify, display_label, format_plain_value, Category, FieldValue, Node, RenderMode,
    ResourceRecord, ResourceTable, TableRow,
};

use crate::error::FetchError;
use crate::resolver::{resolve_reference, resolve_reference_list};
use crate::source::RecordSource;

/// Draws a random identifier for a category, uniform over
/// `[1, max_resource]` inclusive.
pub fn draw_resource_id(category: Category) -> u32 {
    rand::thread_rng().gen_range(1..=category.config().max_resource)
}

/// The table viewer.
pub struct TableViewer<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> TableViewer<S> {
    /// Creates a viewer over a record source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Triggers the viewer for a category: random draw, then the full
    /// fetch, classify, resolve, render pipeline.
    pub async fn trigger(&self, category: Category) -> Result<ResourceTable, FetchError> {
        let id = draw_resource_id(category);
        self.show(category, id).await
    }

    /// Shows a specific record. The deterministic entry point used by
    /// scripting and tests.
    #[instrument(skip(self), fields(category = %category, id))]
    pub async fn show(&self, category: Category, id: u32) -> Result<ResourceTable, FetchError> {
        let record = self.source.record(category, id).await?;
        let rows = self.build_rows(&record).await?;

        info!(category = %category, id, rows = rows.len(), "Rendering table");

        let mut table = ResourceTable::new();
        table.render(rows);
        Ok(table)
    }

    /// Builds the table rows for a record, resolving cross-references
    /// as they are encountered. Row order follows record order.
    async fn build_rows(&self, record: &ResourceRecord) -> Result<Vec<TableRow>, FetchError> {
        let links = self.source.links();
        let mut rows = Vec::with_capacity(record.len());

        for (field, value) in record.iter() {
            let mode = classify(field, value, links);
            debug!(field, ?mode, "Classified field");

            let node = match (mode, value) {
                (RenderMode::Link, FieldValue::Reference(url) | FieldValue::Text(url)) => {
                    let label_field = links.label_field(field).unwrap_or("name");
                    resolve_reference(&self.source, url, label_field).await?
                }
                (RenderMode::LinkList, FieldValue::ReferenceList(urls)) => {
                    let label_field = links.label_field(field).unwrap_or("name");
                    resolve_reference_list(&self.source, urls, label_field).await?
                }
                _ => format_plain_value(field, value, links),
            };

            rows.push(TableRow::new(display_label(field), node));
        }

        Ok(rows)
    }
}

// ============================================================================
// Tests
// ============================================================================
