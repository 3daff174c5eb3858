//! Environment-driven configuration.

use std::str::FromStr;

/// Load variables from a `.env` file if one exists. Real environment
/// variables always win.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Read an environment variable, falling back to a default when it is
/// unset or unparsable.
pub fn env<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env("SERVER_HOST", "127.0.0.1".to_string()),
            port: env("SERVER_PORT", 8080),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
