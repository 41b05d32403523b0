//! HTTP layer for envview
//!
//! Two read-only endpoints over the startup snapshot:
//! - `GET /env` flat `key=value` text
//! - `GET /json` nested JSON document

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::logging_layer;
pub use routes::{create_router, AppState};
