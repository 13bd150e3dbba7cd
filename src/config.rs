//! Process configuration, read once from the environment at startup.

use std::env;
use std::time::Duration;

use crate::client::RetryPolicy;

/// Top-level configuration for the server and the upstream client.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream: UpstreamConfig,
    pub retry: RetryPolicy,
}

/// Upstream endpoint and credentials.
///
/// Held in configuration rather than as process-wide constants so tests can
/// point the client at a local server.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the recipe-search endpoint
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
    /// Per-attempt connect/read timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upstream: UpstreamConfig::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.edamam.com/search".to_string(),
            app_id: String::new(),
            app_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `RECIPE_HOST`, `RECIPE_PORT`, `RECIPE_BASE_URL`,
    /// `RECIPE_APP_ID`, `RECIPE_APP_KEY`, `RECIPE_UPSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("RECIPE_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = env::var("RECIPE_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            } else {
                eprintln!(
                    "Warning: Invalid RECIPE_PORT value '{}', using default {}",
                    port_str, config.port
                );
            }
        }

        if let Ok(base_url) = env::var("RECIPE_BASE_URL") {
            config.upstream.base_url = base_url;
        }

        if let Ok(app_id) = env::var("RECIPE_APP_ID") {
            config.upstream.app_id = app_id;
        }

        if let Ok(app_key) = env::var("RECIPE_APP_KEY") {
            config.upstream.app_key = app_key;
        }

        if let Ok(timeout_str) = env::var("RECIPE_UPSTREAM_TIMEOUT_SECS") {
            if let Ok(secs) = timeout_str.parse::<u64>() {
                config.upstream.timeout = Duration::from_secs(secs);
            } else {
                eprintln!(
                    "Warning: Invalid RECIPE_UPSTREAM_TIMEOUT_SECS value '{}', using default {:?}",
                    timeout_str, config.upstream.timeout
                );
            }
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
