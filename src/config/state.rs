// Application state shared by every request

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

// Immutable for the lifetime of the process; cloning only bumps the Arc
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Wraps an already-loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Builds the state from the process-wide configuration singleton
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(EnvironmentVariables::instance()?.clone()))
    }
}
