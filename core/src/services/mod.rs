//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, NewUser};
pub use password::PasswordHasher;
pub use token::{
    SigningKey, TokenClassifier, TokenCodec, TokenIssuer, TokenService, TokenServiceConfig,
};
