//! Tests for authentication service

mod mocks;
