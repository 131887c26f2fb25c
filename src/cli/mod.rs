//! CLI module
//!
//! Command-line interface for pulling trade history.
//!
//! # Commands
//!
//! - `walk` - Follow the cursor page by page until the history runs out
//! - `fetch` - Fetch a single page and exit

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
