//! User Service Library
//!
//! CRUD HTTP service over a single `users` table with soft delete.
//!
//! - **repository**: data access (SeaORM entity, `UserRepository` trait and store)
//! - **infra**: database connection and migrations
//! - **api**: axum handlers, extractors, routes and OpenAPI document
//! - **config**: environment-driven configuration

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;

/// Run the HTTP server. Explicit `host`/`port` override the environment.
pub async fn run(host: Option<String>, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(database = ?config.database, "Starting user service");

    // Initialize database (applies pending migrations)
    let db = Arc::new(Database::connect(&config.database).await?);

    let state = AppState::from_database(db);
    let app = create_router(state);

    // Host may be a name or an IP literal
    let listener = tokio::net::TcpListener::bind(config.server.addr()).await?;
    let addr = listener.local_addr()?;
    info!("User service listening on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
