//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    fail: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Create a repository already holding `user`
    pub fn with_existing_user(user: User) -> Self {
        let mut users = HashMap::new();
        users.insert(user.username.clone(), user);
        Self {
            users: Arc::new(RwLock::new(users)),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a storage error
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Remove a user, simulating account deletion
    pub async fn remove(&self, username: &str) -> Option<User> {
        self.users.write().await.remove(username)
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("mock storage unavailable"));
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.contains_key(username))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;

        if users.contains_key(&user.username) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}
