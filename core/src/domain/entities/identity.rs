//! Authenticated identity passed into the token services.

use serde::{Deserialize, Serialize};

/// Subject identifier plus granted authorities
///
/// Owned by the credential store; the core receives it by value and never
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject identifier, written to the `sub` claim
    pub subject: String,

    /// Granted authorities (e.g. `ROLE_USER`)
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn new(subject: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
