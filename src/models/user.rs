//! Admin user model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored admin account.
///
/// The password is kept in plaintext and compared verbatim at login. This is
/// not a credential scheme fit for production; it must never be serialized,
/// hence no `Serialize` derive.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

/// Create user data
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

/// Public view of a user (no password)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
