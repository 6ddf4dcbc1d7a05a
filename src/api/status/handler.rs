// Handlers for the service status endpoints

use tracing::{info, instrument};

/// Body returned by `GET /`
pub const ROOT_MESSAGE: &str = "Spring Boot Backend is running!";

/// Body returned by `GET /hello`
pub const HELLO_MESSAGE: &str = "Hello from Spring Boot Backend!";

/// Liveness text for the root path
#[instrument]
pub async fn root_handler() -> &'static str {
    info!("Root endpoint called");
    ROOT_MESSAGE
}

/// Greeting text
#[instrument]
pub async fn hello_handler() -> &'static str {
    info!("Hello endpoint called");
    HELLO_MESSAGE
}
