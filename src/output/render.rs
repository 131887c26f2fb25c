//! Table and JSON Lines rendering

use crate::error::Result;
use crate::types::Trade;
use chrono::{TimeZone, Utc};
use std::io::Write;

const COLUMNS: usize = 5;
const HEADER: [&str; COLUMNS] = ["tid", "date", "side", "price", "amount"];

/// Render one batch as a fixed-width table, header included
///
/// Column widths are sized to the batch. The returned string has no
/// trailing newline.
pub fn render_table(batch: &[Trade]) -> String {
    let header = HEADER.map(String::from);
    let rows: Vec<[String; COLUMNS]> = batch.iter().map(table_row).collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&header, &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Write one batch as a table to the given writer
pub fn write_table(writer: &mut impl Write, batch: &[Trade]) -> Result<()> {
    writeln!(writer, "{}", render_table(batch))?;
    Ok(())
}

/// Write one batch as JSON Lines, one trade object per line
pub fn write_jsonl(writer: &mut impl Write, batch: &[Trade]) -> Result<()> {
    for trade in batch {
        let line = serde_json::to_string(trade)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

fn table_row(trade: &Trade) -> [String; COLUMNS] {
    [
        trade.tid.to_string(),
        format_date(trade.date),
        trade.side.to_string(),
        format!("{:.2}", trade.price),
        format!("{:.8}", trade.amount),
    ]
}

/// Format a Unix timestamp as a UTC datetime, falling back to the raw
/// number when it is outside the representable range
fn format_date(seconds: i64) -> String {
    match Utc.timestamp_opt(seconds, 0).single() {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => seconds.to_string(),
    }
}

fn format_row(cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) -> String {
    let mut padded = Vec::with_capacity(COLUMNS);
    for (cell, &width) in cells.iter().zip(widths.iter()) {
        padded.push(format!("{cell:<width$}"));
    }
    let line = padded.join("  ");
    line.trim_end().to_string()
}
