//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::{AppResult, ErrorBody};
use domain::{NewUser, User, UserChanges};

use crate::api::extractors::{IdPath, JsonBody};
use crate::api::state::AppState;

/// Confirmation returned by a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "User with ID 1 deleted")]
    pub message: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
        .route("/user/:id", get(get_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All active users", body = Vec<User>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "user",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<User>> {
    let user = state.users.find_by_id(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Body could not be decoded", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create(payload).await?;
    tracing::info!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user
///
/// Only non-empty fields are written. The response echoes the decoded body,
/// not the stored row.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "user",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserChanges,
    responses(
        (status = 200, description = "Changes applied", body = UserChanges),
        (status = 400, description = "Body could not be decoded", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UserChanges>,
) -> AppResult<Json<UserChanges>> {
    let changes = state.users.update(id, payload).await?;
    Ok(Json(changes))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "user",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DeleteResponse>> {
    state.users.delete(id).await?;
    tracing::info!(id, "user deleted");

    Ok(Json(DeleteResponse {
        message: format!("User with ID {} deleted", id),
    }))
}
