//! CLI command implementations.

pub mod categories;
pub mod character;
pub mod table;
