//! In-memory credential store
//!
//! Used when no database is configured and throughout the test suites.

mod user_repository;


pub use user_repository::InMemoryUserRepository;
