use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ks_core::domain::entities::user::User;
use ks_core::errors::{AuthError, DomainError};
use ks_core::repositories::UserRepository;

/// `UserRepository` backed by a map keyed by username
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Remove a user; returns the removed record
    pub async fn remove(&self, username: &str) -> Option<User> {
        self.users.write().await.remove(username)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        tracing::debug!(username = %user.username, "Stored user in memory");
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}
