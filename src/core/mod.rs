// Process-level plumbing: logging and the HTTP server

pub mod logging;
pub mod server;
