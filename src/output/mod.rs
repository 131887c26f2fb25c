//! Output module
//!
//! Renders trade batches for people and for pipes.
//!
//! # Overview
//!
//! This module provides:
//! - A fixed-width table view of a batch, one row per trade
//! - JSON Lines output, one trade object per line

mod render;

pub use render::{render_table, write_jsonl, write_table};
