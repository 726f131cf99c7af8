//! Authentication endpoints.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lunas_shared::AppResult;

use crate::ApiClient;

/// Console user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access including user management.
    Admin,
    /// Day-to-day data entry.
    Staff,
    /// Read-only access.
    Viewer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Profile of a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password, verified by the backend.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Profile of the authenticated user.
    pub user: UserProfile,
}

/// Client for `/api/auth` endpoints.
#[derive(Debug)]
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// POST `/api/auth/login` - Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.api.post("/api/auth/login", &request).await?;
        info!(email, "Logged in");
        Ok(response)
    }

    /// GET `/api/auth/me` - Fetches the profile behind the current token.
    pub async fn me(&self) -> AppResult<UserProfile> {
        self.api.get("/api/auth/me", &[]).await
    }
}
