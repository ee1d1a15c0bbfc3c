//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User data access
    pub users: Arc<dyn UserRepository>,
    /// Database handle for health checks (absent when running on a substitute store)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create app state backed by the SeaORM store on `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        Self {
            users,
            database: Some(database),
        }
    }

    /// Create app state with a manually injected repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            database: None,
        }
    }
}
