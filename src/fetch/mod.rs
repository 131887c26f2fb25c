//! Page fetch module
//!
//! One logical "fetch the page at this cursor" operation, with transient
//! failures masked behind a bounded retry policy.
//!
//! # Behavior
//!
//! - **Retry budget**: up to `max_attempts` tries per page, counted from 1
//! - **Constant delay**: `retry_delay` between attempts, same cursor each time
//! - **Fail fast**: malformed bodies and client errors surface immediately
//! - **Exhaustion**: the terminal error carries the cursor and attempt count

mod fetcher;
mod types;

pub use fetcher::PageFetcher;
pub use types::{FetchConfig, FetchConfigBuilder, PageRequest, CURSOR_PARAM};

#[cfg(test)]
mod tests;
