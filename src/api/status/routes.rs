// Status route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Registers the two read-only text endpoints
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::root_handler))
        .route("/hello", get(handler::hello_handler))
}
