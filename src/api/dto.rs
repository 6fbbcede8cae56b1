//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::dataset::ColumnKind;
use serde::{Deserialize, Serialize};

// ============================================
// PAGE DTOs
// ============================================

/// Query parameters selecting what to render
#[derive(Debug, Default, Deserialize)]
pub struct RenderParams {
    /// Menu label; `Home` when absent
    #[serde(default)]
    pub page: Option<String>,
    /// Append the full-year calendar
    #[serde(default)]
    pub calendar: bool,
}

/// One menu entry
#[derive(Debug, Serialize, Deserialize)]
pub struct PageDto {
    pub label: String,
    pub slug: String,
}

/// Ordered menu
#[derive(Debug, Serialize, Deserialize)]
pub struct PagesResponse {
    pub pages: Vec<PageDto>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Column description
#[derive(Debug, Serialize)]
pub struct ColumnDto {
    pub name: String,
    pub kind: ColumnKind,
}

/// Dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub columns: Vec<ColumnDto>,
    pub row_count: usize,
}

// ============================================
// CORRELATION DTOs
// ============================================

/// Single off-diagonal correlation
#[derive(Debug, Serialize)]
pub struct CorrelationDto {
    pub column_a: String,
    pub column_b: String,
    /// Pearson correlation coefficient (-1 to 1)
    pub coefficient: f64,
    /// Human-readable strength: "strong", "moderate", "weak", "negligible"
    pub strength: String,
}

/// Correlations response
#[derive(Debug, Serialize)]
pub struct CorrelationsResponse {
    /// Numeric columns, in dataset order
    pub columns: Vec<String>,
    /// Square matrix; `null` where undefined
    pub matrix: Vec<Vec<Option<f64>>>,
    /// Pairs sorted by absolute strength
    pub correlations: Vec<CorrelationDto>,
}

// ============================================
// UPLOAD DTOs
// ============================================

/// Upload query parameters
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub filename: String,
}

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Always "accepted"
    pub status: String,
    pub filename: String,
    pub bytes: usize,
    pub message: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status: "ok" or "empty"
    pub dataset: String,
    /// Rows in the loaded dataset
    pub rows: usize,
    /// Configured listen address, host:port
    pub address: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
