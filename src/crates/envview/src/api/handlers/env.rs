//! Flat text endpoint handler

use axum::{extract::State, http::header, response::IntoResponse};
use envtree::render_flat;

use crate::api::routes::AppState;

/// Handler for GET /env
///
/// One `key=value` line per variable.
pub async fn env(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_flat(&state.variables);
    ([(header::CONTENT_TYPE, "text/plain")], body)
}
