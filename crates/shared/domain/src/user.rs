//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Storage-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "john@gmail.com"))]
    pub email: String,
}

/// User creation data transfer object
///
/// Missing or `null` fields decode as empty strings; no content validation
/// is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct NewUser {
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Tonkhab"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "Tonkhab@gmail.com"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Partial user update.
///
/// An empty string means "not supplied": this type cannot clear a field.
/// `null` and missing keys decode to the empty string.
/// Unknown keys (`id`, timestamps) are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UserChanges {
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Updated John Doe"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// New email address
    #[cfg_attr(feature = "openapi", schema(example = "john@gmail.com"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

impl UserChanges {
    /// Name to write, if supplied
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Email to write, if supplied
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
