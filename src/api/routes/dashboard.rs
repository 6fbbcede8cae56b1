//! Dashboard Route
//!
//! - GET /?page=<label>&calendar=<bool> - The interactive HTML page
//!
//! Every request is a fresh interaction: the whole page is rendered again
//! from the selected label and the calendar trigger.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::RenderParams;
use crate::api::error::ApiResult;
use crate::api::routes::pages::resolve_page;
use crate::api::state::AppState;
use crate::surface::html::render_html;

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderParams>,
) -> ApiResult<Html<String>> {
    let page = resolve_page(params.page.as_deref())?;
    let document = state.dashboard.render(page, params.calendar);
    Ok(Html(render_html(&document, page)?))
}
