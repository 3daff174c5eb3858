//! Migration runner.
//!
//! Usage:
//!   cargo run --bin migrate           - apply pending migrations
//!   cargo run --bin migrate rollback  - roll back the last migration
//!   cargo run --bin migrate status    - show migration status
//!   cargo run --bin migrate fresh     - drop everything and re-run

use app::migrations::Migrator;
use plinth::database::{DatabaseConfig, DbConnection};
use sea_orm_migration::MigratorTrait;
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db = match DbConnection::connect(&DatabaseConfig::from_env()).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("failed to connect to database: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("up");

    let result = match command {
        "up" | "migrate" => Migrator::up(db.inner(), None).await,
        "down" | "rollback" => {
            let steps: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);
            Migrator::down(db.inner(), Some(steps)).await
        }
        "status" => Migrator::status(db.inner()).await,
        "fresh" => Migrator::fresh(db.inner()).await,
        _ => {
            eprintln!("unknown command: {command}");
            eprintln!("usage: migrate [up|rollback|status|fresh]");
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("migration failed: {err}");
        std::process::exit(1);
    }
    println!("done");
}
