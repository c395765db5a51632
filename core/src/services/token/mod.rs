//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing key derivation from the configured secret
//! - Encoding and verifying signed compact tokens
//! - Classifying tokens as access or refresh tokens
//! - Issuing access/refresh token pairs

mod classifier;
mod codec;
mod config;
mod issuer;
mod key;
mod service;

#[cfg(test)]
mod tests;

pub use classifier::TokenClassifier;
pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use key::{SigningKey, MIN_KEY_BYTES};
pub use service::TokenService;
