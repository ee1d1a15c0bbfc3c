//! User service configuration.

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Postgres connection parameters
    pub database: DatabaseConfig,
    /// HTTP bind address
    pub server: ServiceConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig::from_env(),
            server: ServiceConfig::from_env(),
        }
    }
}
