//! API route definitions

use axum::{routing::get, Router};

use crate::api::{handlers, middleware::logging_layer};
use crate::environment::Variables;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub variables: Variables,
}

impl AppState {
    pub fn new(variables: Variables) -> Self {
        Self { variables }
    }
}

/// Build the complete API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/env", get(handlers::env))
        .route("/json", get(handlers::json))
        .layer(logging_layer())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envtree::FlatMap;
    use std::sync::Arc;

    #[test]
    fn test_state_shares_snapshot() {
        let variables: Variables = Arc::new(FlatMap::new());
        let state = AppState::new(Arc::clone(&variables));
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.variables, &cloned.variables));
        let _router = create_router(cloned);
    }
}
