//! Record sources.
//!
//! [`RecordSource`] is the seam between the viewers and the network:
//! it hands back records already normalized and stripped, whether they
//! were addressed by category/id or by a cross-reference locator.
//! [`SwapiClient`] is the production implementation; tests substitute
//! mocks.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use holotable_core::{Category, LinkTable, ResourceRecord};

use crate::client::HttpClient;
use crate::error::FetchError;

/// Default base URL for the archive API.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

// ============================================================================
// Record Source Trait
// ============================================================================

/// A source of normalized archive records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches a record by category and identifier.
    async fn record(&self, category: Category, id: u32) -> Result<ResourceRecord, FetchError>;

    /// Fetches a record by a cross-reference locator.
    async fn record_by_url(&self, url: &str) -> Result<ResourceRecord, FetchError>;

    /// The cross-reference configuration this source normalizes with.
    fn links(&self) -> &LinkTable;
}

// ============================================================================
// SWAPI Client
// ============================================================================

/// Archive record source backed by the SWAPI REST API.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: HttpClient,
    base_url: String,
    links: LinkTable,
}

impl SwapiClient {
    /// Creates a client against the public archive endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url: DEFAULT_BASE_URL.to_string(),
            links: LinkTable::default(),
        })
    }

    /// Overrides the base URL. Used against test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the cross-reference configuration.
    pub fn with_links(mut self, links: LinkTable) -> Self {
        self.links = links;
        self
    }

    /// Fetches and normalizes one record from a fully-formed URL.
    async fn fetch_normalized(&self, url: &str) -> Result<ResourceRecord, FetchError> {
        // Reject malformed locators before going to the network.
        Url::parse(url)?;

        let raw = self.http.get_json(url).await?;
        let record = ResourceRecord::from_json(raw, &self.links)?;
        debug!(url = %url, fields = record.len(), "Normalized record");
        Ok(record)
    }
}

#[async_trait]
impl RecordSource for SwapiClient {
    async fn record(&self, category: Category, id: u32) -> Result<ResourceRecord, FetchError> {
        let url = format!("{}/{}/{}", self.base_url, category.api_name(), id);
        debug!(category = %category, id, "Fetching record");
        self.fetch_normalized(&url).await
    }

    async fn record_by_url(&self, url: &str) -> Result<ResourceRecord, FetchError> {
        self.fetch_normalized(url).await
    }

    fn links(&self) -> &LinkTable {
        &self.links
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = SwapiClient::new().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let client = SwapiClient::new()
            .unwrap()
            .with_base_url("http://localhost:9999/api");
        assert_eq!(client.base_url, "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_malformed_locator_rejected_before_network() {
        let client = SwapiClient::new().unwrap();
        let result = client.record_by_url("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
