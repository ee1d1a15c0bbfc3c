//! User repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::entities::{user, UserActiveModel, UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserChanges};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// All query paths exclude soft-deleted records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all active users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find active user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Create a new user; storage assigns the ID
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Apply a partial update and return the changes as supplied
    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<UserChanges>;

    /// Soft delete user by ID (sets deleted_at timestamp)
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        debug!(count = models.len(), "listed users");
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let active_model = UserActiveModel {
            id: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            name: Set(new_user.name),
            email: Set(new_user.email),
        };

        let model = active_model.insert(&self.db).await?;
        debug!(id = model.id, "created user");
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<UserChanges> {
        let mut query = UserEntity::update_many()
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::DeletedAt.is_null());

        // Empty strings are "not supplied" and never overwrite a column
        if let Some(name) = changes.name() {
            query = query.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = changes.email() {
            query = query.col_expr(user::Column::Email, Expr::value(email));
        }

        let result = query.exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        debug!(id, "updated user");
        Ok(changes)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let now = Utc::now();
        let result = UserEntity::update_many()
            .col_expr(user::Column::DeletedAt, Expr::value(now))
            .col_expr(user::Column::UpdatedAt, Expr::value(now))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        // Absent or already deleted rows are not an error
        debug!(id, rows = result.rows_affected, "soft deleted user");
        Ok(())
    }
}
