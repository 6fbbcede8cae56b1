//! Correlation Routes
//!
//! - GET /api/v1/correlations - Correlation matrix of the numeric columns

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CorrelationDto, CorrelationsResponse};
use crate::api::state::AppState;
use crate::correlation::{correlation_strength, CorrelationMatrix};

/// GET /api/v1/correlations
///
/// Pearson coefficients over pairwise-complete rows.
pub async fn get_correlations(State(state): State<Arc<AppState>>) -> Json<CorrelationsResponse> {
    let matrix = CorrelationMatrix::compute(state.dashboard.dataset());

    let correlations = matrix
        .strongest_pairs()
        .into_iter()
        .map(|(a, b, r)| CorrelationDto {
            column_a: a.to_string(),
            column_b: b.to_string(),
            coefficient: r,
            strength: correlation_strength(r).to_string(),
        })
        .collect();

    Json(CorrelationsResponse {
        columns: matrix.columns.clone(),
        matrix: matrix.values.clone(),
        correlations,
    })
}
