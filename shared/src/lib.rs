//! Shared configuration and common types for the Keystone server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by the API

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, MAX_TOKEN_EXPIRY,
};
pub use errors::{error_codes, ErrorResponse};
