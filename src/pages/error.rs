//! Render error types
//!
//! Every variant is recovered by the dispatcher and shown inline; none
//! of them stops the process.

use crate::chart::ChartError;
use thiserror::Error;

/// Errors a renderer can raise
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Required column(s) are absent from the dataset
    #[error("{message}")]
    MissingColumns {
        missing: Vec<String>,
        message: &'static str,
    },

    /// The chart layer rejected the chart
    #[error("Error in generating chart: {0}")]
    Chart(#[from] ChartError),
}

/// Result type for renderers
pub type RenderResult = Result<(), RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::MissingColumns {
            missing: vec!["ever_married".to_string()],
            message: "Necessary columns not found in the dataset",
        };
        assert_eq!(err.to_string(), "Necessary columns not found in the dataset");

        let err: RenderError = ChartError::TypeMismatch {
            field: "age".to_string(),
            expected: "numeric".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Error in generating chart: Field 'age' must be numeric"
        );
    }
}
