//! Shared helpers for router-level tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use common::{AppError, AppResult};
use domain::{NewUser, User, UserChanges};
use user_service_lib::api::{create_router, AppState};
use user_service_lib::repository::UserRepository;

/// In-memory stand-in for the SeaORM store.
///
/// Rows are never removed; delete only stamps `deleted_at`, mirroring the
/// soft delete behaviour of the real table.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    /// Number of rows ever stored, including soft-deleted ones.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|u| u.deleted_at.is_none()).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: rows.len() as i64 + 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            name: new_user.name,
            email: new_user.email,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<UserChanges> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or(AppError::NotFound)?;
        if let Some(name) = changes.name() {
            user.name = name.to_string();
        }
        if let Some(email) = changes.email() {
            user.email = email.to_string();
        }
        user.updated_at = Utc::now();
        Ok(changes)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(user) = rows
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        {
            let now = Utc::now();
            user.deleted_at = Some(now);
            user.updated_at = now;
        }
        Ok(())
    }
}

/// Test application: the production router over an in-memory store.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let router = create_router(AppState::new(users.clone()));
        Self { router, users }
    }

    /// Send a request and return status plus decoded JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body)).await
    }

    /// Create a user and return its assigned id.
    pub async fn create_user(&self, name: &str, email: &str) -> i64 {
        let body = serde_json::json!({ "name": name, "email": email }).to_string();
        let (status, user) = self.post_json("/users", &body).await;
        assert_eq!(status, StatusCode::CREATED);
        user["id"].as_i64().unwrap()
    }
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
