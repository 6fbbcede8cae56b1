//! Page Routes
//!
//! - GET /api/v1/pages - Ordered menu
//! - GET /api/v1/render - Render a page as JSON blocks

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PageDto, PagesResponse, RenderParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::pages::Page;
use crate::surface::Document;

/// GET /api/v1/pages
pub async fn list_pages() -> Json<PagesResponse> {
    let pages = Page::ALL
        .iter()
        .map(|page| PageDto {
            label: page.label().to_string(),
            slug: page.slug().to_string(),
        })
        .collect();

    Json(PagesResponse { pages })
}

/// GET /api/v1/render?page=<label>&calendar=<bool>
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderParams>,
) -> ApiResult<Json<Document>> {
    let page = resolve_page(params.page.as_deref())?;
    Ok(Json(state.dashboard.render(page, params.calendar)))
}

/// Resolve an optional menu label; absent means `Home`
pub(crate) fn resolve_page(label: Option<&str>) -> ApiResult<Page> {
    match label {
        None => Ok(Page::default()),
        Some(label) => Page::resolve(label)
            .ok_or_else(|| ApiError::NotFound(format!("page '{}'", label))),
    }
}
