//! User and role management endpoints.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lunas_shared::AppResult;

use crate::ApiClient;

use super::auth::UserRole;

/// A console user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the user can sign in.
    pub is_active: bool,
}

/// Request body for creating a user.
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Login email (must be unique).
    pub email: String,
    /// Initial password; the backend hashes and stores it.
    pub password: String,
    /// Initial role.
    pub role: UserRole,
}

/// Request body for changing a user's role.
#[derive(Debug, Serialize)]
pub struct SetRoleRequest {
    /// New role.
    pub role: UserRole,
}

/// Client for `/api/users` endpoints.
#[derive(Debug)]
pub struct UsersClient<'a> {
    api: &'a ApiClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/users` - Lists all users.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.api.get("/api/users", &[]).await
    }

    /// POST `/api/users` - Creates a user.
    pub async fn create(&self, request: &CreateUserRequest) -> AppResult<User> {
        let user: User = self.api.post("/api/users", request).await?;
        info!(user_id = %user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// PUT `/api/users/{id}/role` - Changes a user's role.
    pub async fn set_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        let user: User = self
            .api
            .put(&format!("/api/users/{id}/role"), &SetRoleRequest { role })
            .await?;
        info!(user_id = %user.id, role = %user.role, "Role updated");
        Ok(user)
    }
}
