//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

pub const DUMMY_HASH: &str = "mock$dummy";

/// Reversible "hasher" that records how often verify runs
pub struct MockPasswordHasher {
    pub verify_calls: AtomicUsize,
}

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self {
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn hash_sync(password: &str) -> String {
        format!("mock${}", password)
    }

    pub fn verify_count(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(Self::hash_sync(password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        Ok(hash != DUMMY_HASH && Self::hash_sync(password) == hash)
    }

    fn dummy_hash(&self) -> &str {
        DUMMY_HASH
    }
}

pub fn token_service() -> Arc<TokenService> {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    let secret = URL_SAFE_NO_PAD.encode([0x33_u8; 32]);
    Arc::new(TokenService::new(TokenServiceConfig::new(secret)).unwrap())
}

pub fn alice() -> User {
    User::new(
        "Alice Doe",
        "alice",
        MockPasswordHasher::hash_sync("correct horse"),
        Role::User,
    )
}

pub struct TestContext {
    pub repository: Arc<MockUserRepository>,
    pub hasher: Arc<MockPasswordHasher>,
    pub tokens: Arc<TokenService>,
    pub service: AuthService<MockUserRepository, MockPasswordHasher>,
}

pub fn context_with(config: AuthServiceConfig) -> TestContext {
    let repository = Arc::new(MockUserRepository::with_existing_user(alice()));
    let hasher = Arc::new(MockPasswordHasher::new());
    let tokens = token_service();
    let service = AuthService::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
        Arc::clone(&tokens),
        config,
    );

    TestContext {
        repository,
        hasher,
        tokens,
        service,
    }
}

pub fn context() -> TestContext {
    context_with(AuthServiceConfig::default())
}
