//! Users repository

use super::{new_id, SharedStore};
use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    store: SharedStore,
}

impl UsersRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: &str) -> Option<User> {
        self.store.read().await.users.get(id).cloned()
    }

    /// Get user by username (exact match)
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Create a user. Username and email must both be unused.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.username == data.username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if store.users.values().any(|u| u.email == data.email) {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let user = User {
            id: new_id(),
            username: data.username,
            password: data.password,
            email: data.email,
            role: data.role,
        };
        store.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}
