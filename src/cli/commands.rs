//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Endpoint used when none is given, the public Mercado Bitcoin trade feed
pub const DEFAULT_URL: &str = "https://www.mercadobitcoin.net/api/BTC/trades/";

/// Tradewalk CLI
#[derive(Parser, Debug)]
#[command(name = "tradewalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trade history endpoint, without the cursor query
    #[arg(short, long, global = true, default_value = DEFAULT_URL)]
    pub url: String,

    /// Attempts per page before giving up
    #[arg(long, global = true, default_value = "4")]
    pub max_attempts: u32,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    pub request_timeout_ms: u64,

    /// Pause before retrying a failed request, in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    pub retry_delay_ms: u64,

    /// Pause between consecutive pages, in milliseconds
    #[arg(long, global = true, default_value = "200")]
    pub batch_delay_ms: u64,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the trade history page by page
    Walk {
        /// Trade id to start after (0 = start of history)
        #[arg(long, default_value = "0")]
        from: u64,

        /// Stop after this many pages (0 = walk to the end)
        #[arg(long, default_value = "0")]
        max_pages: usize,
    },

    /// Fetch a single page and exit
    Fetch {
        /// Trade id the page starts after
        #[arg(long, default_value = "0")]
        cursor: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table, one row per trade
    Table,
    /// JSON Lines, one trade object per line
    Jsonl,
}
