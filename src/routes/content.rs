//! Content API handlers.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use site::net::types::{Case, Page};

use crate::state::AppState;

/// `GET /api/cases`: every case in configured order.
pub async fn list_cases(State(state): State<AppState>) -> Json<Vec<Case>> {
    Json(state.content.cases().to_vec())
}

/// `GET /api/cases/{slug}`
pub async fn get_case(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Case>, StatusCode> {
    state.content.case(&slug).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/pages/{slug}`
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Page>, StatusCode> {
    state.content.page(&slug).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
