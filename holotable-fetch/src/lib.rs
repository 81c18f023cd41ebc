// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Holotable Fetch
//!
//! Async fetching and the viewer pipelines for Holotable.
//!
//! ## Record pipeline
//!
//! - [`HttpClient`] - reqwest wrapper with timeout and JSON decoding
//! - [`RecordSource`] / [`SwapiClient`] - normalized record access,
//!   by category/id or by cross-reference locator
//! - [`resolver`] - concurrent, order-preserving cross-reference
//!   resolution into link nodes
//!
//! ## Viewers
//!
//! - [`TableViewer`] - the parameterized trigger controller: random
//!   draw, fetch, classify, resolve, table build
//! - [`CharacterViewer`] - character record fetch plus portrait
//!   existence probe
//!
//! ## Example
//!
//! ```ignore
//! use holotable_core::Category;
//! use holotable_fetch::{SwapiClient, TableViewer};
//!
//! let viewer = TableViewer::new(SwapiClient::new()?);
//! let table = viewer.trigger(Category::Planets).await?;
//! ```

pub mod character;
pub mod client;
pub mod error;
pub mod probe;
pub mod resolver;
pub mod source;
pub mod viewer;

// Re-export key types at crate root
pub use character::{CharacterRecord, CharacterView, CharacterViewer, MAX_CHARACTER_ID};
pub use client::HttpClient;
pub use error::FetchError;
pub use probe::{Probe, ProbeResult};
pub use resolver::{resolve_reference, resolve_reference_list};
pub use source::{RecordSource, SwapiClient, DEFAULT_BASE_URL};
pub use viewer::{draw_resource_id, TableViewer};
