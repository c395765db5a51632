//! bcrypt implementation of the PasswordHasher trait.

use async_trait::async_trait;

use ks_core::errors::DomainError;
use ks_core::services::password::PasswordHasher;

use crate::InfrastructureError;

/// Password hasher using bcrypt
///
/// Hashing and verification run on the blocking thread pool.
pub struct BcryptPasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor
    ///
    /// # Errors
    ///
    /// Fails if `cost` is outside the range bcrypt accepts (4..=31).
    pub fn new(cost: u32) -> Result<Self, InfrastructureError> {
        if !(4..=31).contains(&cost) {
            return Err(InfrastructureError::Config(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                cost
            )));
        }

        let dummy_hash = bcrypt::hash("keystone-unknown-user", cost)?;
        Ok(Self { cost, dummy_hash })
    }

    /// Create a hasher with bcrypt's default cost
    pub fn with_default_cost() -> Result<Self, InfrastructureError> {
        Self::new(bcrypt::DEFAULT_COST)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| InfrastructureError::Task(e.to_string()))?
            .map_err(InfrastructureError::from)?;

        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| InfrastructureError::Task(e.to_string()))?
            .map_err(|e| {
                tracing::error!(error = %e, "Stored password hash is unreadable");
                InfrastructureError::from(e)
            })?;

        Ok(matches)
    }

    fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }
}
