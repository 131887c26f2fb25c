//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::fetch::{FetchConfig, PageFetcher};
use crate::output::{write_jsonl, write_table};
use crate::transport::HttpTransport;
use crate::types::Trade;
use crate::walk::{TradeWalker, WalkStats};
use futures::StreamExt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{error, info};
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Walk { from, max_pages } => self.walk(*from, *max_pages).await,
            Commands::Fetch { cursor } => self.fetch(*cursor).await,
        }
    }

    /// Build the fetch configuration from the global flags
    fn build_config(&self, max_pages: usize) -> Result<FetchConfig> {
        let config = FetchConfig::builder()
            .max_attempts(self.cli.max_attempts)
            .request_timeout(Duration::from_millis(self.cli.request_timeout_ms))
            .retry_delay(Duration::from_millis(self.cli.retry_delay_ms))
            .batch_delay(Duration::from_millis(self.cli.batch_delay_ms))
            .max_pages(max_pages)
            .build();
        config.validate()?;
        Ok(config)
    }

    /// Check the endpoint URL parses before any request goes out
    fn base_url(&self) -> Result<String> {
        let url = Url::parse(&self.cli.url)?;
        Ok(url.to_string())
    }

    /// Walk the endpoint page by page, rendering each batch as it lands
    async fn walk(&self, from: u64, max_pages: usize) -> Result<()> {
        let config = self.build_config(max_pages)?;
        let base_url = self.base_url()?;
        let walker = TradeWalker::new(HttpTransport::new(), base_url.clone(), config);

        info!("Walking {base_url} from tid {from}");

        let started = Instant::now();
        let mut stats = WalkStats::new();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        let mut pages = walker.pages(from);
        let mut outcome = Ok(());
        while let Some(page) = pages.next().await {
            match page {
                Ok(batch) => {
                    stats.add_batch(&batch);
                    self.render(&mut out, &batch)?;
                }
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        stats.set_duration(started.elapsed().as_millis() as u64);

        match outcome {
            Ok(()) => {
                info!(
                    "Walk complete: {} trade(s) across {} page(s) in {}ms, last tid {}",
                    stats.trades, stats.pages, stats.duration_ms, stats.last_tid
                );
                Ok(())
            }
            Err(err) => {
                if let Error::RetriesExhausted { cursor, .. } = &err {
                    error!(
                        "Walk stopped at tid {cursor} after {} page(s) and {} trade(s); resume with --from {cursor}",
                        stats.pages, stats.trades
                    );
                }
                Err(err)
            }
        }
    }

    /// Fetch a single page and render it
    async fn fetch(&self, cursor: u64) -> Result<()> {
        let config = self.build_config(0)?;
        let base_url = self.base_url()?;
        let fetcher = PageFetcher::new(HttpTransport::new(), config);

        let batch = fetcher.fetch_page(&base_url, cursor).await?;
        info!("Fetched {} trade(s) after tid {cursor}", batch.len());

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out, &batch)
    }

    /// Render one batch to the writer in the selected format
    fn render(&self, out: &mut impl Write, batch: &[Trade]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Table => write_table(out, batch),
            OutputFormat::Jsonl => write_jsonl(out, batch),
        }
    }
}
