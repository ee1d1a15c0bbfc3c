//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::user_handler::DeleteResponse;
use common::ErrorBody;
use domain::{NewUser, User, UserChanges};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0",
        description = "This is a sample server for managing users."
    ),
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            NewUser,
            UserChanges,
            DeleteResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "users", description = "User collection endpoints"),
        (name = "user", description = "Single user endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/user/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
    }
}
