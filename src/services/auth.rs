//! Authentication service
//!
//! Credentials are compared in plaintext and no session or token is issued.
//! The caller keeps its own "logged in" flag. Any production deployment needs
//! a real credential and session scheme in front of the admin routes.

use crate::{
    error::{AppError, AppResult},
    models::user::UserInfo,
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check a username/password pair and return the user without its password
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<UserInfo> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await
            .filter(|user| user.password == password)
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        tracing::info!(user_id = %user.id, "User {} logged in", user.username);
        Ok(user.into())
    }
}
