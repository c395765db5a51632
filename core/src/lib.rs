//! # Keystone Core
//!
//! Core token lifecycle and authentication logic for the Keystone backend.
//! This crate contains domain entities, the token services (signing key,
//! codec, classifier, issuer), the authentication service, repository
//! interfaces and error types. Transport and storage live in other crates
//! and are reached only through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
