//! Display Surface
//!
//! Renderers write to a [`DisplaySurface`]: a vertically stacked sequence
//! of blocks (text, a data table, charts, week rows). [`Document`]
//! collects the blocks of one interaction; the `html` and `text` modules
//! turn a document into something a person can look at.

pub mod html;
pub mod text;

use crate::calendar::Week;
use crate::chart::{ChartSpec, ChartTable};
use crate::dataset::{Dataset, Value};
use serde::Serialize;

/// A chart ready for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartBlock {
    pub spec: ChartSpec,
    pub table: ChartTable,
    /// Vega-Lite document with inlined data
    pub vega_lite: serde_json::Value,
}

/// One element of the output document
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Header { text: String },
    Subheader { text: String },
    Text { text: String },
    Markdown { text: String },
    Link { label: String, url: String },
    Error { message: String },
    Table { columns: Vec<String>, rows: Vec<Vec<Value>> },
    Chart(ChartBlock),
    Weeks { weeks: Vec<Week> },
}

/// Sink for rendered output
pub trait DisplaySurface {
    fn push(&mut self, block: Block);

    fn title(&mut self, text: &str) {
        self.push(Block::Title { text: text.to_string() });
    }

    fn header(&mut self, text: &str) {
        self.push(Block::Header { text: text.to_string() });
    }

    fn subheader(&mut self, text: &str) {
        self.push(Block::Subheader { text: text.to_string() });
    }

    fn text(&mut self, text: &str) {
        self.push(Block::Text { text: text.to_string() });
    }

    fn markdown(&mut self, text: &str) {
        self.push(Block::Markdown { text: text.to_string() });
    }

    fn link(&mut self, label: &str, url: &str) {
        self.push(Block::Link {
            label: label.to_string(),
            url: url.to_string(),
        });
    }

    fn error(&mut self, message: &str) {
        self.push(Block::Error {
            message: message.to_string(),
        });
    }

    /// The full dataset as a table
    fn table(&mut self, dataset: &Dataset) {
        self.push(Block::Table {
            columns: dataset.column_names().iter().map(|c| c.to_string()).collect(),
            rows: dataset.records(),
        });
    }

    fn chart(&mut self, chart: ChartBlock) {
        self.push(Block::Chart(chart));
    }

    fn weeks(&mut self, weeks: &[Week]) {
        self.push(Block::Weeks {
            weeks: weeks.to_vec(),
        });
    }
}

/// Blocks collected during one render
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl DisplaySurface for Document {
    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> Vec<&ChartBlock> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Chart(chart) => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Error { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn headers(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Header { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn subheaders(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Subheader { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Week rows of every `Weeks` block, in order
    pub fn week_blocks(&self) -> Vec<&[Week]> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Weeks { weeks } => Some(weeks.as_slice()),
                _ => None,
            })
            .collect()
    }
}
