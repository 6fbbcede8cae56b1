//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The dataset is loaded before the listener binds, so a running server
/// is always ready.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. An empty dataset still serves every page, so it
/// only degrades the status.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let rows = state.dashboard.dataset().row_count();
    let (status, dataset) = if rows > 0 {
        ("healthy", "ok")
    } else {
        ("degraded", "empty")
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: dataset.to_string(),
        rows,
        address: state.config.addr(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
