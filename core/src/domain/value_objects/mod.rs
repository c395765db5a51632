//! Value objects representing immutable domain concepts.

pub mod security_context;

// Re-export commonly used types
pub use security_context::SecurityContext;
