//! Application bootstrap.
//!
//! Wires configuration, logging, the database, and the route table
//! together. Each component receives its collaborators explicitly; there
//! is no ambient registry.

use std::sync::Arc;

use plinth::config;
use plinth::database::DbConnection;
use plinth::Server;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DatabaseConfig, ServerConfig};
use crate::middleware::LoggingMiddleware;
use crate::migrations::Migrator;
use crate::routes;
use crate::services::StudentService;

pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::load_env();
    init_tracing();

    let db_config = DatabaseConfig::from_env();
    let db = DbConnection::connect(&db_config).await?;
    Migrator::up(db.inner(), None).await?;
    info!(url = %db_config.url, "database ready");

    let service = Arc::new(StudentService::new(db));
    let server_config = ServerConfig::from_env();

    Server::from_config(routes::routes(service), &server_config)
        .middleware(LoggingMiddleware)
        .run()
        .await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
