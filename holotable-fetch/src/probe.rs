//! Existence probes.
//!
//! A probe issues a GET purely to learn whether a resource is there;
//! the body is never used. The portrait loader probes an image URL
//! before exposing it.

use crate::client::HttpClient;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a probe check.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Whether the probe succeeded.
    pub success: bool,
    /// Response time in milliseconds.
    pub response_time_ms: u64,
    /// Status code, when a response arrived at all.
    pub status_code: Option<u16>,
    /// Error message, when the request itself failed.
    pub error: Option<String>,
}

impl ProbeResult {
    /// A failed result carrying an error description. Used by tests
    /// and by callers that skip probing.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response_time_ms: 0,
            status_code: None,
            error: Some(error.into()),
        }
    }
}

/// A probe for checking resource existence.
#[derive(Debug, Clone)]
pub struct Probe {
    /// The URL to probe.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Probe {
    /// Creates a new probe for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the timeout for this probe.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Executes the probe and returns the result.
    pub async fn check(&self, client: &HttpClient) -> ProbeResult {
        let start = Instant::now();

        debug!(url = %self.url, "Running probe");

        match client.get(&self.url).await {
            Ok(response) => {
                let elapsed = start.elapsed();
                ProbeResult {
                    success: response.status().is_success(),
                    response_time_ms: elapsed.as_millis() as u64,
                    status_code: Some(response.status().as_u16()),
                    error: None,
                }
            }
            Err(e) => {
                let elapsed = start.elapsed();
                ProbeResult {
                    success: false,
                    response_time_ms: elapsed.as_millis() as u64,
                    status_code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_defaults() {
        let probe = Probe::new("https://example.com/image.jpg");
        assert_eq!(probe.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_failure_result() {
        let result = ProbeResult::failure("connection refused");
        assert!(!result.success);
        assert_eq!(result.status_code, None);
        assert_eq!(result.error.as_deref(), Some("connection refused"));
    }
}
