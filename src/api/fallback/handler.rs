// Start of file: src/api/fallback/handler.rs

use axum::http::{StatusCode, Uri};
use tracing::warn;

use crate::utils::response_handler::HandlerResponse;

// Answers any path no router claimed
pub async fn fallback_handler(uri: Uri) -> HandlerResponse {
    warn!("No route for {}", uri.path());

    HandlerResponse::new(StatusCode::NOT_FOUND)
        .message("The requested route does not exist")
}

// End of file: src/api/fallback/handler.rs
