//! Configuration for the authentication service

use ks_shared::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether to allow registration of new users
    pub allow_registration: bool,
    /// Whether a refresh mints a new refresh token instead of returning the presented one
    pub rotate_refresh_tokens: bool,
    /// Whether self-registration may request `Role::Admin`
    pub allow_admin_registration: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
            rotate_refresh_tokens: false,
            allow_admin_registration: false,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            allow_registration: config.allow_registration,
            rotate_refresh_tokens: config.rotate_refresh_tokens,
            allow_admin_registration: config.allow_admin_registration,
        }
    }
}
