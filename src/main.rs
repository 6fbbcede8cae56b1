//! Stroke Dashboard Server
//!
//! Run with: cargo run --bin stroke-dashboard
//!
//! Loads the configuration, reads the dataset once and serves the
//! dashboard until Ctrl-C or SIGTERM.
//!
//! # Configuration
//!
//! See `stroke-dashboard-cli config` for the file format. Environment
//! variables:
//! - `STROKE_DASHBOARD_DATA_PATH`: Dataset CSV
//! - `STROKE_DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `STROKE_DASHBOARD_PORT`: Port to listen on (default: 8501)
//! - `STROKE_DASHBOARD_LOG_LEVEL`, `STROKE_DASHBOARD_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter

use anyhow::Context;
use stroke_dashboard::api::{serve, AppState};
use stroke_dashboard::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    stroke_dashboard::init_logging(&loaded.config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Starting stroke dashboard v{}", env!("CARGO_PKG_VERSION"));
    loaded.log();
    let config = loaded.config;

    let dataset = stroke_dashboard::dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset from {:?}", config.dataset.path))?;

    let state = AppState::new(dataset, config.api.clone());
    serve(state, &config.api).await?;

    Ok(())
}
