//! Domain-specific error types and error handling.

mod types;


// Re-export all error types and utilities
pub use types::{
    extract_chinese_message, extract_english_message, AuthError, InvalidTokenReason, TokenError,
};

use ks_shared::ConfigError;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bad or missing signing configuration; fatal at start-up
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        DomainError::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Whether the error means "the caller is not authenticated"
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Token(e) => !matches!(e, TokenError::GenerationFailed),
            DomainError::Auth(e) => {
                matches!(e, AuthError::AuthenticationFailed | AuthError::UserNotFound)
            }
            _ => false,
        }
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
