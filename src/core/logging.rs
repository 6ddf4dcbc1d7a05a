// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

const DEFAULT_FILTER: &str = "hello_backend=info,tower_http=debug,axum=trace";

// Initialize the tracing subscriber; RUST_LOG overrides the default filter
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init: a second call (e.g. from tests) must not panic
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::FULL)
        .try_init();
}

// End of file: /src/core/logging.rs
