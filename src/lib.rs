//! # Stroke Dashboard
//!
//! A menu-driven dashboard over the healthcare stroke dataset: descriptive
//! charts per attribute, a correlation heatmap and a full-year calendar,
//! served over HTTP or rendered in the terminal.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading into a typed, column-major table
//! - [`chart`]: Declarative chart specs, evaluation and Vega-Lite output
//! - [`correlation`]: Pearson correlation matrix of numeric columns
//! - [`calendar`]: Month grids for a calendar year
//! - [`pages`]: The page menu and one renderer per page
//! - [`surface`]: Display surface, collected documents, HTML and text output
//! - [`dashboard`]: Page chrome plus the selected page
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stroke_dashboard::{Dashboard, Page};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = stroke_dashboard::dataset::load(
//!         "New_healthcare-dataset-stroke-data.csv".as_ref(),
//!     )?;
//!     let dashboard = Dashboard::new(dataset);
//!
//!     let page = Page::resolve("Age Distribution").unwrap_or_default();
//!     let document = dashboard.render(page, false);
//!
//!     print!("{}", stroke_dashboard::surface::text::render_text(&document));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod correlation;
pub mod dashboard;
pub mod dataset;
pub mod logging;
pub mod pages;
pub mod surface;

// Re-export top-level types for convenience
pub use dataset::{Column, ColumnKind, CsvLoader, Dataset, LoadError, LoadResult, Value};

pub use chart::{evaluate, ChartError, ChartSpec, ChartTable, ColorEncoding, Encoding, Mark};

pub use correlation::CorrelationMatrix;

pub use calendar::{CalendarGrid, MonthGrid, Week};

pub use pages::{invoke, Page, RenderContext, RenderError, RenderResult};

pub use surface::{Block, DisplaySurface, Document};

pub use dashboard::Dashboard;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig};

pub use logging::init_logging;
