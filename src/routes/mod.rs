// This file declares the route modules and re-exports their contents
// This allows other parts of the code to use `use crate::routes::misuse_router`
// instead of `use crate::routes::misuse::misuse_router`

pub mod misuse;

pub use misuse::*;

use crate::{handlers::health_checker_handler, AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Full application router with state attached.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/healthchecker", get(health_checker_handler))
        .nest(MISUSE_BASE_PATH, misuse_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
