//! Database configuration.

use crate::config::env;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL. Postgres and SQLite are supported.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
    /// Whether to log SQL statements through the sqlx logger.
    pub logging: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env("DATABASE_URL", "sqlite://./database.db".to_string()),
            max_connections: env("DB_MAX_CONNECTIONS", 10),
            min_connections: env("DB_MIN_CONNECTIONS", 1),
            connect_timeout: env("DB_CONNECT_TIMEOUT", 30),
            logging: env("DB_LOGGING", false),
        }
    }

    /// Config pointing at a specific URL with the default pool settings.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 30,
            logging: false,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
