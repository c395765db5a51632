//! Domain entities representing core business objects.

pub mod identity;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use identity::Identity;
pub use token::{ClaimSet, Claims, TokenPair, TokenType, REFRESH_TOKEN_TYPE, TOKEN_TYPE_CLAIM};
pub use user::{Role, User};
