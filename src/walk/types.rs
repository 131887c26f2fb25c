//! Walk output types

use crate::error::Result;
use crate::types::{Trade, TradeBatch};
use futures::Stream;
use std::pin::Pin;

/// Type alias for the lazy page stream returned by
/// [`TradeWalker::pages`](super::TradeWalker::pages)
pub type BatchStream = Pin<Box<dyn Stream<Item = Result<TradeBatch>> + Send>>;

/// Statistics from one walk
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    /// Pages emitted
    pub pages: usize,
    /// Trades seen across all pages
    pub trades: usize,
    /// Trade id of the last trade seen
    pub last_tid: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl WalkStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one emitted batch into the counters
    pub fn add_batch(&mut self, batch: &[Trade]) {
        self.pages += 1;
        self.trades += batch.len();
        if let Some(trade) = batch.last() {
            self.last_tid = trade.tid;
        }
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
