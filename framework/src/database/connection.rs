//! Database connection management.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use crate::database::config::DatabaseConfig;
use crate::error::Error;

/// Clonable, thread-safe wrapper around SeaORM's connection pool. One
/// instance is shared by every request.
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<DatabaseConnection>,
}

impl DbConnection {
    /// Establish a connection pool from config.
    ///
    /// For file-backed SQLite databases the file is created on first use.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let url = if config.url.starts_with("sqlite://") {
            let path = config.url.trim_start_matches("sqlite://");
            let path = path.trim_start_matches("./");

            if path != ":memory:" && !path.starts_with(":memory:") {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).ok();
                    }
                }

                if !std::path::Path::new(path).exists() {
                    std::fs::File::create(path).ok();
                }
            }

            format!("sqlite:{}?mode=rwc", path)
        } else {
            config.url.clone()
        };

        let mut opt = ConnectOptions::new(&url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .sqlx_logging(config.logging);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// The underlying SeaORM connection, for use with entity queries.
    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }
}
