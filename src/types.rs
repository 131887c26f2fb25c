//! Common types used throughout tradewalk
//!
//! This module contains the trade record model shared by the transport,
//! the fetcher and the walker, plus the cursor sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cursor
// ============================================================================

/// Cursor value meaning "no trades seen yet". A batch whose last trade id
/// equals this sentinel (in practice: an empty batch) marks the end of the
/// remote dataset.
pub const START_CURSOR: u64 = 0;

// ============================================================================
// Trade Record
// ============================================================================

/// One executed trade, as returned by the remote trade-history endpoint.
///
/// The JSON field names follow the upstream API exactly; `tid` is the
/// monotonically increasing trade id the cursor convention is built on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade id, used as the pagination cursor
    pub tid: u64,
    /// Execution time as a unix timestamp (seconds)
    pub date: i64,
    /// Taker side
    #[serde(rename = "type")]
    pub side: TradeSide,
    /// Execution price in the quote currency
    pub price: f64,
    /// Traded amount in the base currency
    pub amount: f64,
}

/// Which side of the book the taker was on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Taker bought
    Buy,
    /// Taker sold
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

/// One page of trades returned by a single fetch
pub type TradeBatch = Vec<Trade>;

/// Trade id of the last element of a batch, or [`START_CURSOR`] when the
/// batch is empty. This is the value the next request's cursor is advanced
/// to, and the walk's termination signal.
pub fn last_tid(batch: &[Trade]) -> u64 {
    batch.last().map_or(START_CURSOR, |trade| trade.tid)
}
