//! Retrying page fetcher
//!
//! Wraps a [`Transport`] with the retry policy. The walker above never
//! sees attempt counts, only the final outcome of a page.

use super::types::{FetchConfig, PageRequest};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::TradeBatch;
use tracing::{error, warn};

/// Fetches one page per call, masking transient failures behind a bounded
/// retry loop
#[derive(Debug, Clone)]
pub struct PageFetcher<T> {
    transport: T,
    config: FetchConfig,
}

impl<T: Transport> PageFetcher<T> {
    /// Create a fetcher over a transport
    pub fn new(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Get the session config
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the page at `cursor`, retrying transient failures up to
    /// `max_attempts` times with the same cursor.
    ///
    /// An empty batch is a success (the endpoint's end-of-data signal).
    /// When the budget runs out the last underlying error is wrapped in
    /// [`Error::RetriesExhausted`] together with the cursor and the number
    /// of attempts made. Non-transient errors surface without retry.
    pub async fn fetch_page(&self, base_url: &str, cursor: u64) -> Result<TradeBatch> {
        let mut attempt = 1u32;

        loop {
            let request = PageRequest::new(base_url, cursor, attempt);
            let outcome = self
                .transport
                .fetch(&request.url(), self.config.request_timeout)
                .await;

            match outcome {
                Ok(batch) => return Ok(batch),
                Err(err) if !err.is_transient() => return Err(err),
                Err(err) => {
                    if attempt >= self.config.max_attempts {
                        error!(
                            "Fetch at tid {cursor} failed on final attempt {attempt}/{}: {err}",
                            self.config.max_attempts
                        );
                        return Err(Error::RetriesExhausted {
                            cursor,
                            attempts: attempt,
                            source: Box::new(err),
                        });
                    }

                    warn!(
                        "Fetch at tid {cursor} failed (attempt {attempt}/{}): {err}; retrying in {:?}",
                        self.config.max_attempts, self.config.retry_delay
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
