//! Password hashing seam between the core and the credential store

use async_trait::async_trait;

use crate::errors::DomainError;

/// Trait for password hashing integration
///
/// Implementations are expected to be slow on purpose (bcrypt, argon2) and
/// to keep that work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;

    /// A well-formed hash that matches no real password
    ///
    /// Login verifies against it when the username is unknown, so that an
    /// unknown user costs the same as a wrong password.
    fn dummy_hash(&self) -> &str;
}
