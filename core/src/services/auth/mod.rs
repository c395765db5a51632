//! Authentication service module
//!
//! This module provides the credential-checking flow around the token services:
//! - Username/password login producing a token pair
//! - Access token renewal from a refresh token
//! - User registration with hashed passwords

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use types::NewUser;
