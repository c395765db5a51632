//! Configuration for the token service

use chrono::Duration;
use ks_shared::{JwtConfig, MAX_TOKEN_EXPIRY};

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Base64url-encoded signing secret
    pub secret: String,
    /// Access token validity
    pub access_token_expiry: Duration,
    /// Refresh token validity
    pub refresh_token_expiry: Duration,
}

impl TokenServiceConfig {
    /// Create a configuration with the default expiries (15 minutes / 7 days)
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: Duration::minutes(15),
            refresh_token_expiry: Duration::days(7),
        }
    }

    pub fn with_access_token_expiry(mut self, expiry: Duration) -> Self {
        self.access_token_expiry = expiry;
        self
    }

    pub fn with_refresh_token_expiry(mut self, expiry: Duration) -> Self {
        self.refresh_token_expiry = expiry;
        self
    }

    /// Checks that both expiries are positive and bounded, and the refresh token outlives the access token
    pub fn validate(&self) -> Result<(), DomainError> {
        let max = Duration::seconds(MAX_TOKEN_EXPIRY);
        if self.access_token_expiry <= Duration::zero() {
            return Err(DomainError::configuration(
                "access token expiry must be positive",
            ));
        }
        if self.refresh_token_expiry <= Duration::zero() {
            return Err(DomainError::configuration(
                "refresh token expiry must be positive",
            ));
        }
        if self.access_token_expiry > max || self.refresh_token_expiry > max {
            return Err(DomainError::configuration(format!(
                "token expiry must not exceed {} seconds",
                MAX_TOKEN_EXPIRY
            )));
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(DomainError::configuration(
                "refresh token expiry must be greater than access token expiry",
            ));
        }
        Ok(())
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let seconds = |value: i64, name: &str| {
            Duration::try_seconds(value).ok_or_else(|| {
                DomainError::configuration(format!("{} is out of range: {}", name, value))
            })
        };

        Ok(Self {
            secret: config.secret.clone(),
            access_token_expiry: seconds(config.access_token_expiry, "access token expiry")?,
            refresh_token_expiry: seconds(config.refresh_token_expiry, "refresh token expiry")?,
        })
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"[REDACTED]")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}
