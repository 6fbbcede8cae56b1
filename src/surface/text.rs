//! Plain-text rendering of a [`Document`] for terminals.

use super::{Block, ChartBlock, Document};
use crate::chart::{AxisKey, ColorValue, Measure};
use std::fmt::Write;

/// Rows of the data table shown before truncating
const TABLE_PREVIEW_ROWS: usize = 10;

pub fn render_text(document: &Document) -> String {
    let mut out = String::new();

    for block in &document.blocks {
        match block {
            Block::Title { text } => {
                let _ = writeln!(out, "{}\n{}", text, "=".repeat(text.chars().count()));
            }
            Block::Header { text } => {
                let _ = writeln!(out, "\n{}\n{}", text, "-".repeat(text.chars().count()));
            }
            Block::Subheader { text } => {
                let _ = writeln!(out, "\n### {}", text);
            }
            Block::Text { text } | Block::Markdown { text } => {
                let _ = writeln!(out, "{}", text.trim());
            }
            Block::Link { label, url } => {
                let _ = writeln!(out, "{} <{}>", label, url);
            }
            Block::Error { message } => {
                let _ = writeln!(out, "error: {}", message);
            }
            Block::Table { columns, rows } => {
                let _ = writeln!(out, "{}", columns.join(" | "));
                for row in rows.iter().take(TABLE_PREVIEW_ROWS) {
                    let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                    let _ = writeln!(out, "{}", cells.join(" | "));
                }
                if rows.len() > TABLE_PREVIEW_ROWS {
                    let _ = writeln!(out, "... {} rows total", rows.len());
                }
            }
            Block::Chart(chart) => write_chart(&mut out, chart),
            Block::Weeks { weeks } => {
                for week in weeks {
                    let _ = writeln!(out, "{:?}", week);
                }
            }
        }
    }

    out
}

fn write_chart(out: &mut String, chart: &ChartBlock) {
    let _ = writeln!(
        out,
        "[{:?} chart] {}",
        chart.spec.mark,
        chart.spec.title.as_deref().unwrap_or_default()
    );

    for row in &chart.table.rows {
        let x = match &row.x {
            AxisKey::Value(v) => v.to_string(),
            AxisKey::Bin(bin) => format!("[{}, {})", bin.start, bin.end),
        };
        let y = match &row.y {
            Measure::Aggregate(v) => format!("{:.2}", v),
            Measure::Value(v) => v.to_string(),
        };
        match &row.color {
            Some(ColorValue::Field(v)) => {
                let _ = writeln!(out, "  {} ({}): {}", x, v, y);
            }
            Some(ColorValue::Literal(c)) => {
                let _ = writeln!(out, "  {} [{}]: {}", x, c, y);
            }
            None => {
                let _ = writeln!(out, "  {}: {}", x, y);
            }
        }
    }
}
