//! tests/common/mod.rs
//! Shared helpers to spawn the Axum app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use hello_backend::{create_app, AppState, EnvironmentVariables};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the production router with default configuration and returns its base URL.
pub fn spawn_app() -> String {
    spawn_router(create_app(AppState::new(EnvironmentVariables::default())))
}

/// Spawns an already-built router on a random unused port and returns its base URL.
pub fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
