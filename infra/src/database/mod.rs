//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - The MySQL-backed credential store

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabaseHealth, DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
