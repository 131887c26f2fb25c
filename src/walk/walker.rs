//! Trade walker implementation

use super::types::BatchStream;
use crate::error::Result;
use crate::fetch::{FetchConfig, PageFetcher};
use crate::transport::Transport;
use crate::types::{last_tid, TradeBatch, START_CURSOR};
use tracing::debug;

/// Walks a cursor-paginated trade endpoint page by page
///
/// A walker owns a [`PageFetcher`] and a base URL. Each call to
/// [`pages`](Self::pages) produces an independent stream: nothing is
/// fetched until the stream is polled, and dropping it mid-walk stops
/// all further requests.
#[derive(Debug, Clone)]
pub struct TradeWalker<T> {
    fetcher: PageFetcher<T>,
    base_url: String,
}

/// Cursor position carried between page fetches
struct WalkState<T> {
    fetcher: PageFetcher<T>,
    base_url: String,
    cursor: u64,
    pages_emitted: usize,
}

impl<T> TradeWalker<T>
where
    T: Transport + Clone + 'static,
{
    /// Create a new walker over the given endpoint
    pub fn new(transport: T, base_url: impl Into<String>, config: FetchConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, config),
            base_url: base_url.into(),
        }
    }

    /// Get the fetch configuration backing this walker
    pub fn config(&self) -> &FetchConfig {
        self.fetcher.config()
    }

    /// Get the base URL this walker requests pages from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lazily walk pages starting from the given cursor
    ///
    /// Each element is one non-empty batch, in upstream order. The walk
    /// ends cleanly on the first empty page (or a page whose last trade
    /// id is zero), or after `max_pages` batches when a cap is set. A
    /// fetch that fails past its retry budget yields the error as the
    /// final element; the stream is over after that.
    pub fn pages(&self, start_cursor: u64) -> BatchStream {
        let state = WalkState {
            fetcher: self.fetcher.clone(),
            base_url: self.base_url.clone(),
            cursor: start_cursor,
            pages_emitted: 0,
        };

        Box::pin(futures::stream::try_unfold(state, step))
    }
}

/// Advance the walk by one page
///
/// `Ok(None)` is the clean end of the walk. The pause between pages
/// happens here, before every fetch except the first, so a terminated
/// walk never sleeps again.
async fn step<T: Transport>(
    mut state: WalkState<T>,
) -> Result<Option<(TradeBatch, WalkState<T>)>> {
    let max_pages = state.fetcher.config().max_pages;
    let batch_delay = state.fetcher.config().batch_delay;

    if max_pages != 0 && state.pages_emitted >= max_pages {
        debug!("Walk reached its page cap of {max_pages}, stopping");
        return Ok(None);
    }

    if state.pages_emitted > 0 {
        tokio::time::sleep(batch_delay).await;
    }

    let batch = state
        .fetcher
        .fetch_page(&state.base_url, state.cursor)
        .await?;

    let last_id = last_tid(&batch);
    if last_id == START_CURSOR {
        debug!("Empty page at tid {}, walk complete", state.cursor);
        return Ok(None);
    }

    debug!(
        "Page {} at tid {}: {} trade(s), next cursor {last_id}",
        state.pages_emitted + 1,
        state.cursor,
        batch.len()
    );

    state.cursor = last_id;
    state.pages_emitted += 1;
    Ok(Some((batch, state)))
}
