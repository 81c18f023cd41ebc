//! HTTP client abstractions.

use crate::error::FetchError;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the archive APIs.
///
/// A thin wrapper around reqwest: timeout, user agent, and JSON
/// decoding that keeps status and parse failures distinguishable.
/// There is deliberately no retry layer.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("holotable/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a GET request, returning the raw response.
    ///
    /// Non-success statuses are returned as responses, not errors;
    /// probes want to inspect the status themselves.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url = %url, "Making GET request");
        Ok(self.inner.get(url).send().await?)
    }

    /// Performs a GET request and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// [`FetchError::Status`] for non-success statuses and
    /// [`FetchError::Decode`] for bodies that are not valid JSON.
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for HttpClient {
    /// Creates a default HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should only
    /// happen if the system's TLS configuration is broken, which
    /// indicates an environment where the application cannot function.
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            panic!(
                "Failed to create default HTTP client: {}. \
                This usually indicates a broken TLS/SSL configuration.",
                e
            )
        })
    }
}
