// Start of file: /src/config/environment.rs

// * Environment configuration, loaded once and cached behind a singleton.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Reads the process environment (plus .env outside production).
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_vars(&vars)
    }

    // * Builds the configuration from a key/value map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            protocol: get_var("PROTOCOL")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_PROTOCOL)),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    // * The address the server binds to when no listener is inherited
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        // ! A failed load is cached; every caller sees the same error
        INSTANCE
            .as_ref()
            .map_err(|err| anyhow::anyhow!("Failed to load environment configuration: {err:#}"))
    }
}


// End of file: /src/config/environment.rs
