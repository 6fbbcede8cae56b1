//! Dataset Context
//!
//! The read-only table every renderer draws from. It is loaded once at
//! startup and then shared by reference.
//!
//! - **types**: `Value`, `Column`, `Dataset`, `Row`
//! - **loader**: CSV loading with column typing and missing-value handling
//! - **error**: Error types

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::{load, CsvLoader, DEFAULT_NA_VALUES};
pub use types::{Column, ColumnKind, Dataset, Row, Value};
