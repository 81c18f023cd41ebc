// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Holotable Core
//!
//! Core types and rendering logic for the Holotable archive explorer.
//!
//! This crate is pure data shaping: it knows nothing about HTTP. Raw
//! JSON responses are normalized into [`ResourceRecord`]s immediately
//! after fetch, and everything downstream works on the typed model:
//!
//! - [`Category`] / [`CategoryConfig`] - the six fixed archive
//!   categories and their identifier bounds
//! - [`LinkTable`] - cross-reference field to display-label field
//!   configuration
//! - [`FieldValue`] / [`ResourceRecord`] - the normalized record model
//! - [`RenderMode`] / [`Node`] - the field classifier and the
//!   presentation tree it produces
//! - [`ResourceTable`] - the two-column (Category, Value) table model

pub mod error;
pub mod models;
pub mod render;

// Re-export error types
pub use error::CoreError;

// Re-export model types
pub use models::{
    Category, CategoryConfig, FieldValue, LinkTable, ResourceRecord, BOOKKEEPING_FIELDS,
};

// Re-export render types
pub use render::{
    capitalize_word, classify, display_label, format_plain_value, table::ResourceTable,
    table::TableRow, title_case, Node, RenderMode,
};
