//! Transport types and traits

use crate::error::Result;
use crate::types::TradeBatch;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for issuing one trade-page request
///
/// Implementations decode the response into a [`TradeBatch`] and map
/// failures onto the crate error taxonomy: transport problems and
/// retryable statuses stay transient, an unparseable body becomes
/// [`crate::Error::Malformed`]. An empty batch is a valid success.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch one page of trades from `url`, giving up after `timeout`
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<TradeBatch>;
}
