// Application server configuration and setup

use std::{net::SocketAddr, sync::Arc, time::Duration};
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::info;

use crate::api::{fallback::fallback_handler, status::status_routes};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::core::logging::init_tracing;
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::response_wrapper,
};

/// Creates the application router with all routes and middleware layers
pub fn create_app(state: AppState) -> Router {
    build_router(status_routes(), state)
}

/// Applies the fallback and the shared middleware stack to a set of routes
pub fn build_router(routes: Router<AppState>, state: AppState) -> Router {
    let env: Arc<EnvironmentVariables> = state.environment.clone();

    routes
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

/// Boots the whole service and blocks until shutdown
pub async fn run() -> Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let addr: SocketAddr = listener.local_addr()?;

    info!(
        "Server listening on: {}://{} ({})",
        state.environment.protocol, addr, state.environment.environment
    );

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
