//! Walk module
//!
//! Lazy, cursor-driven traversal of a trade history endpoint. A walker
//! strings page fetches together: each batch's last trade id becomes the
//! next request's cursor, an empty page ends the walk, and a short pause
//! between pages keeps the request rate polite.
//!
//! # Overview
//!
//! The walk module provides:
//! - `TradeWalker` - Produces a lazy stream of trade batches
//! - `BatchStream` - Type alias for that stream
//! - `WalkStats` - Counters accumulated while consuming a walk

mod types;
mod walker;

pub use types::{BatchStream, WalkStats};
pub use walker::TradeWalker;
