//! HTTP transport implementation
//!
//! A thin reqwest wrapper: GET with a per-request timeout, JSON body
//! decoded straight into the trade record type. Retry policy lives one
//! layer up, in the fetcher.

use super::types::Transport;
use crate::error::{Error, Result};
use crate::types::TradeBatch;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP transport backed by a shared reqwest client
///
/// Cloning is cheap (the underlying client is reference counted), so one
/// transport can back any number of concurrent walks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(format!("tradewalk/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<TradeBatch> {
        let response = match self.client.get(url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let batch: TradeBatch = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("not a trade page: {e}")))?;

        debug!("GET {url}: {} trade(s)", batch.len());
        Ok(batch)
    }
}
