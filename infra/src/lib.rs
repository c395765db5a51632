//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits declared in `ks_core`:
//!
//! - **Database**: MySQL `UserRepository` using SQLx
//! - **Memory**: in-process `UserRepository` for development and tests
//! - **Security**: bcrypt `PasswordHasher`
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use ks_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// In-memory credential store
pub mod memory;

/// Password hashing
pub mod security;

/// Configuration re-exports for infrastructure services
pub mod config {
    pub use ks_shared::config::DatabaseConfig;
}

pub use memory::InMemoryUserRepository;
pub use security::BcryptPasswordHasher;

#[cfg(feature = "mysql")]
pub use database::{DatabaseHealth, DatabasePool, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Blocking task failed to complete
    #[error("Background task failed: {0}")]
    Task(String),
}

// Storage detail never reaches callers of the core
impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
