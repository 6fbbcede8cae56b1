//! Dataset Routes
//!
//! - GET /api/v1/dataset - Column names, kinds and row count

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ColumnDto, DatasetResponse};
use crate::api::state::AppState;

/// GET /api/v1/dataset
pub async fn describe_dataset(State(state): State<Arc<AppState>>) -> Json<DatasetResponse> {
    let dataset = state.dashboard.dataset();
    let columns = dataset
        .columns()
        .iter()
        .map(|c| ColumnDto {
            name: c.name.clone(),
            kind: c.kind,
        })
        .collect();

    Json(DatasetResponse {
        columns,
        row_count: dataset.row_count(),
    })
}
