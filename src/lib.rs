// Library root for the hello backend service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{build_router, create_app};
