//! HTTP snippet fetching.
//!
//! Provides a blocking HTTP client for fetching snippet bodies from the
//! origin server. Unlike a generic client wrapper, a non-2xx/3xx status is
//! not an `Err` here: the resolver needs the observed status to decide
//! between serving a stale copy and reporting a failure.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Default request timeout for origin fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches snippet bodies over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

/// Response from fetching a snippet.
#[derive(Debug)]
pub struct FetchResponse {
    /// Observed HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl FetchResponse {
    /// Whether the status counts as a successful fetch (200..400).
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

impl HttpFetcher {
    /// Create a new fetcher with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("snipfill")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a snippet body from a URL.
    ///
    /// Transport-level failures (connection refused, timeout, invalid
    /// URL) are returned as errors; any received response is returned
    /// with its status.
    pub fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {url}"))?;

        Ok(FetchResponse { status, body })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
