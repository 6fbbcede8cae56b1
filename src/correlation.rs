//! Correlation Matrix
//!
//! Pearson correlation coefficients between every pair of numeric columns,
//! computed over the rows where both cells are present. The matrix can be
//! reshaped into a long-form `(index, variable, value)` table for the
//! heatmap.

use crate::dataset::{Column, Dataset, Value};
use serde::Serialize;

/// Square correlation matrix indexed by column name on both axes
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// `values[i][j]` correlates `columns[i]` with `columns[j]`; `None` when undefined
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlate all numeric columns of the dataset
    pub fn compute(dataset: &Dataset) -> Self {
        let columns: Vec<&Column> = dataset.numeric_columns();
        let series: Vec<Vec<Option<f64>>> = columns.iter().map(|c| c.numeric_values()).collect();

        let mut values = vec![vec![None; columns.len()]; columns.len()];
        for i in 0..columns.len() {
            for j in i..columns.len() {
                let (x, y) = complete_pairs(&series[i], &series[j]);
                let r = if i == j {
                    // Defined only when the column varies
                    pearson_correlation(&x, &y).map(|_| 1.0)
                } else {
                    pearson_correlation(&x, &y)
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        tracing::debug!(columns = columns.len(), "Computed correlation matrix");

        Self {
            columns: columns.iter().map(|c| c.name.clone()).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient between two named columns
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    /// Long-form table with columns `index`, `variable`, `value`.
    ///
    /// Rows are ordered variable-major: every `index` for the first
    /// variable, then every `index` for the second, and so on.
    pub fn long_form(&self) -> Dataset {
        let mut rows = Vec::with_capacity(self.len() * self.len());
        for (j, variable) in self.columns.iter().enumerate() {
            for (i, index) in self.columns.iter().enumerate() {
                rows.push(vec![
                    Value::from(index.as_str()),
                    Value::from(variable.as_str()),
                    self.values[i][j].map(Value::Float).unwrap_or(Value::Null),
                ]);
            }
        }
        Dataset::from_rows(&["index", "variable", "value"], rows)
    }

    /// Off-diagonal pairs sorted by absolute strength (strongest first)
    pub fn strongest_pairs(&self) -> Vec<(&str, &str, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                if let Some(r) = self.values[i][j] {
                    pairs.push((self.columns[i].as_str(), self.columns[j].as_str(), r));
                }
            }
        }
        pairs.sort_by(|a, b| {
            b.2.abs()
                .partial_cmp(&a.2.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pairs
    }
}

/// Keep positions where both series have a value
fn complete_pairs(a: &[Option<f64>], b: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    a.iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip()
}

/// Calculate Pearson correlation coefficient
///
/// Returns a value between -1 and 1, or `None` when the inputs are empty,
/// of unequal length, or either side has zero variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        None
    } else {
        Some((sxy / denominator).clamp(-1.0, 1.0))
    }
}

/// Convert correlation coefficient to human-readable strength
pub fn correlation_strength(r: f64) -> &'static str {
    let abs_r = r.abs();
    if abs_r > 0.7 {
        "strong"
    } else if abs_r > 0.5 {
        "moderate"
    } else if abs_r > 0.3 {
        "weak"
    } else {
        "negligible"
    }
}
