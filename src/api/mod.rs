//! Dashboard HTTP server
//!
//! Serves the interactive dashboard and a small JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /?page=<label>&calendar=<bool>` - HTML page with sidebar and charts
//!
//! ## API
//! - `GET /api/v1/pages` - Ordered menu
//! - `GET /api/v1/render?page=<label>&calendar=<bool>` - Rendered blocks as JSON
//! - `GET /api/v1/dataset` - Column names, kinds and row count
//! - `GET /api/v1/correlations` - Correlation matrix
//! - `POST /api/v1/upload?filename=<name>` - Accepts a CSV/Excel file (unused)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use stroke_dashboard::api::{serve, AppState};
//! use stroke_dashboard::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = stroke_dashboard::dataset::load("stroke.csv".as_ref())?;
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(dataset, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use crate::config::ApiConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Largest accepted upload body (200 MB)
const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/pages", get(routes::pages::list_pages))
        .route("/render", get(routes::pages::render_page))
        .route("/dataset", get(routes::dataset::describe_dataset))
        .route("/correlations", get(routes::correlations::get_correlations))
        .route("/upload", post(routes::upload::upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Stroke dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Stroke dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
