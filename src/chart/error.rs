//! Chart error types

use thiserror::Error;

/// Errors raised while validating or evaluating a chart specification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The specification is structurally invalid
    #[error("Invalid chart specification: {0}")]
    InvalidSpec(String),

    /// A field holds values of the wrong type for its encoding
    #[error("Field '{field}' must be {expected}")]
    TypeMismatch { field: String, expected: String },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
