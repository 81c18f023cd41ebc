//! Fetch error types.
//!
//! The variants keep the failure classes apart: transport failure,
//! non-success status, decode failure, and a referenced record missing
//! its label field are all distinguishable to callers.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failure (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {code} from {url}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// The requested URL.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("Decode error from {url}: {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A referenced record is missing its display-label field.
    #[error("Missing label field '{field}' in record at {url}")]
    MissingField {
        /// The label field that was expected.
        field: String,
        /// Locator of the record that lacked it.
        url: String,
    },

    /// A locator was not a valid URL.
    #[error("Invalid locator: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] holotable_core::CoreError),
}
