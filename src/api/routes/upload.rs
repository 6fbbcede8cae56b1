//! Upload Route
//!
//! - POST /api/v1/upload?filename=<name> - Accept a CSV or Excel file
//!
//! The upload is acknowledged but never replaces the dataset loaded at
//! startup.

use axum::{body::Bytes, extract::Query, http::StatusCode, Json};
use std::path::Path;

use crate::api::dto::{UploadParams, UploadResponse};
use crate::api::error::{ApiError, ApiResult};

/// Extensions the upload control accepts
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// POST /api/v1/upload
pub async fn upload_file(
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    if !is_accepted(&params.filename) {
        return Err(ApiError::Validation(format!(
            "'{}' is not a .csv or .xlsx file",
            params.filename
        )));
    }

    tracing::info!(
        filename = %params.filename,
        bytes = body.len(),
        "Upload received; the loaded dataset is unchanged"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(UploadResponse {
            status: "accepted".to_string(),
            filename: params.filename,
            bytes: body.len(),
            message: "Uploaded files are not used; the dashboard shows the dataset loaded at startup"
                .to_string(),
        }),
    ))
}

fn is_accepted(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
