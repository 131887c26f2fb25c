//! Fetch types and configuration

use crate::error::{Error, Result};
use std::time::Duration;

/// Query parameter carrying the cursor, fixed by the remote API:
/// `?tid=N` means "return trades with id greater than N".
pub const CURSOR_PARAM: &str = "tid";

/// Configuration for a walk session
///
/// Owned by the fetcher/walker pair and immutable for their lifetime.
/// Defaults match the upstream service's tolerances: four attempts, one
/// second per request, one second between retries, 200ms between batches.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum attempts per page, including the first one
    pub max_attempts: u32,
    /// Timeout for a single request
    pub request_timeout: Duration,
    /// Delay between attempts at the same cursor
    pub retry_delay: Duration,
    /// Throttle between emitted batches, independent of the retry delay
    pub batch_delay: Duration,
    /// Maximum batches to emit per walk (0 = unlimited)
    pub max_pages: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            request_timeout: Duration::from_millis(1000),
            retry_delay: Duration::from_millis(1000),
            batch_delay: Duration::from_millis(200),
            max_pages: 0,
        }
    }
}

impl FetchConfig {
    /// Create a new config builder
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Check the config for values the fetch loop cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::invalid_value("max_attempts", "must be at least 1"));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::invalid_value(
                "request_timeout",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Builder for [`FetchConfig`]
#[derive(Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set the maximum attempts per page
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the delay between retry attempts
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Set the throttle between emitted batches
    pub fn batch_delay(mut self, delay: Duration) -> Self {
        self.config.batch_delay = delay;
        self
    }

    /// Set the page cap (0 = unlimited)
    pub fn max_pages(mut self, pages: usize) -> Self {
        self.config.max_pages = pages;
        self
    }

    /// Build the config
    pub fn build(self) -> FetchConfig {
        self.config
    }
}

/// One fetch attempt, constructed fresh per try
///
/// Nothing outlives the attempt except the cursor it was built from.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Endpoint base URL
    pub base_url: String,
    /// Cursor to request trades after
    pub cursor: u64,
    /// Attempt number, starting at 1
    pub attempt: u32,
}

impl PageRequest {
    /// Create a request for one attempt
    pub fn new(base_url: impl Into<String>, cursor: u64, attempt: u32) -> Self {
        Self {
            base_url: base_url.into(),
            cursor,
            attempt,
        }
    }

    /// Build the request target: `<base_url>?tid=<cursor>`, byte-for-byte
    /// the shape the remote API documents.
    pub fn url(&self) -> String {
        format!("{}?{}={}", self.base_url, CURSOR_PARAM, self.cursor)
    }
}
