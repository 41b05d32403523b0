//! Nested JSON endpoint handler

use axum::{extract::State, http::header, response::IntoResponse};
use envtree::render_structured;

use crate::api::routes::AppState;
use crate::error::ServerError;

/// Handler for GET /json
///
/// Keys are folded on `__` into nested objects. A rendering failure is
/// unrecoverable and terminates the process.
pub async fn json(State(state): State<AppState>) -> impl IntoResponse {
    match render_structured(&state.variables) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body),
        Err(e) => {
            tracing::error!("Unable to process json data: {}", ServerError::from(e));
            std::process::exit(1);
        }
    }
}
