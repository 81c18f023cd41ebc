//! Domain models for the Holotable archive.
//!
//! - [`Category`] / [`CategoryConfig`] - archive categories and their
//!   random-draw bounds
//! - [`LinkTable`] - cross-reference field configuration
//! - [`FieldValue`] / [`ResourceRecord`] - the normalized record model

pub mod category;
pub mod links;
pub mod record;

pub use category::{Category, CategoryConfig};
pub use links::LinkTable;
pub use record::{FieldValue, ResourceRecord, BOOKKEEPING_FIELDS};
