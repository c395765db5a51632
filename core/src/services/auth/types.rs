//! Input types for the authentication service

use crate::domain::entities::user::Role;

/// Registration request as seen by the core
///
/// The password is plaintext here and is hashed before it reaches the store.
#[derive(Clone)]
pub struct NewUser {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(
        full_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            username: username.into(),
            password: password.into(),
            role: Role::default(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}
