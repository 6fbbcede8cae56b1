//! Dataset error types
//!
//! Defines all errors that can occur while loading the dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record has more fields than the header row
    #[error("Malformed record on line {line}: expected {expected} fields, found {found}")]
    Malformed {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The input has no header row
    #[error("Dataset has no header row")]
    EmptyHeader,
}

/// Result type alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;
