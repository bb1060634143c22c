use crate::{
    handlers::misuse::{right_handler, wrong_handler},
    AppState,
};
use axum::{routing::get, Router};

pub const MISUSE_BASE_PATH: &str = "/concurrenthashmapmisuse";

pub fn misuse_router() -> Router<AppState> {
    Router::new()
        .route("/wrong", get(wrong_handler))
        .route("/right", get(right_handler))
}
