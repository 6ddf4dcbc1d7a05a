// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::warn;

/// Maps errors raised by tower layers to HTTP status codes
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    status_for_error(&err)
}

/// Status chosen for a layer error; 500 when nothing more specific applies
pub fn status_for_error(err: &BoxError) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&**err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    warn!("Unhandled middleware error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
