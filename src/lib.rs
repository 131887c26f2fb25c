//! # Tradewalk
//!
//! An incremental puller for cursor-paginated trade history endpoints.
//! Point it at a feed shaped like `GET <base>?tid=<cursor>` and it walks
//! the full history one page at a time.
//!
//! ## Features
//!
//! - **Cursor Walking**: Each page's last trade id becomes the next cursor
//! - **Bounded Retries**: Transient failures retried on a fixed budget with a constant delay
//! - **Lazy Streaming**: Pages are fetched only as the stream is consumed
//! - **Polite Pacing**: A configurable pause between consecutive pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use tradewalk::{FetchConfig, HttpTransport, TradeWalker};
//!
//! #[tokio::main]
//! async fn main() -> tradewalk::Result<()> {
//!     let walker = TradeWalker::new(
//!         HttpTransport::new(),
//!         "https://www.mercadobitcoin.net/api/BTC/trades/",
//!         FetchConfig::default(),
//!     );
//!
//!     // Walk from trade id 770000 until the history runs out
//!     let mut pages = walker.pages(770_000);
//!     while let Some(batch) = pages.try_next().await? {
//!         println!("{} trade(s)", batch.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      TradeWalker                        │
//! │  pages(start_cursor) → Stream<TradeBatch>               │
//! │  cursor := last tid of each batch, empty page = done    │
//! └────────────────────────────┬────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴────────────────────────────┐
//! │                      PageFetcher                        │
//! │  one page per call, transient failures retried with a   │
//! │  constant delay until the attempt budget runs out       │
//! └────────────────────────────┬────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴────────────────────────────┐
//! │                       Transport                         │
//! │  GET <base>?tid=<cursor> → Vec<Trade> | classified error│
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for tradewalk
pub mod error;

/// Trade records and cursor helpers
pub mod types;

/// HTTP transport for fetching single pages
pub mod transport;

/// Retrying page fetcher
pub mod fetch;

/// Lazy cursor walk over the full history
pub mod walk;

/// Table and JSON Lines rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use fetch::{FetchConfig, FetchConfigBuilder, PageFetcher};
pub use transport::{HttpTransport, Transport};
pub use types::{last_tid, Trade, TradeBatch, TradeSide, START_CURSOR};
pub use walk::{BatchStream, TradeWalker, WalkStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
