//! JSON body extractor with the service's error shape.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON extractor whose rejection is a 400 `AppError`.
///
/// Invalid syntax, mismatched field types and a missing JSON content type
/// all become `AppError::BadRequest`. No field-level validation is done.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_user(JsonBody(payload): JsonBody<NewUser>) {
///     // payload decoded, fields not validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
