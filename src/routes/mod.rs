//! Route construction and top-level router assembly.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::response;
use crate::state::AppState;
use axum::{http::StatusCode, Router};
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: operational routes at the root, student CRUD under
/// /api, envelope-shaped 404 for everything else.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", student_routes(state))
        .fallback(unknown_route)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

async fn unknown_route() -> impl axum::response::IntoResponse {
    response::message_only(StatusCode::NOT_FOUND, "resource not found")
}
