//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Default access token validity: 15 minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;

/// Default refresh token validity: 7 days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604_800;

/// Longest accepted validity for either token: 10 years
pub const MAX_TOKEN_EXPIRY: i64 = 3650 * 86_400;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64url-encoded signing secret
    #[serde(skip_serializing)]
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and default expiries
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                key: "JWT_SECRET".to_string(),
            })?;

        Ok(Self {
            secret: secret.trim().to_string(),
            access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?,
            refresh_token_expiry: env_or("JWT_REFRESH_TOKEN_EXPIRY", DEFAULT_REFRESH_TOKEN_EXPIRY)?,
        })
    }

    /// Checks the expiry invariants: both positive and bounded, refresh outliving access
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_TOKEN_EXPIRY".to_string(),
                reason: "must be a positive number of seconds".to_string(),
            });
        }
        for (key, value) in [
            ("JWT_ACCESS_TOKEN_EXPIRY", self.access_token_expiry),
            ("JWT_REFRESH_TOKEN_EXPIRY", self.refresh_token_expiry),
        ] {
            if value > MAX_TOKEN_EXPIRY {
                return Err(ConfigError::Invalid {
                    key: key.to_string(),
                    reason: format!("must not exceed {} seconds", MAX_TOKEN_EXPIRY),
                });
            }
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_TOKEN_EXPIRY".to_string(),
                reason: "must be greater than the access token expiry".to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Whether new users may register
    #[serde(default = "default_allow_registration")]
    pub allow_registration: bool,

    /// Whether a refresh also replaces the refresh token
    #[serde(default)]
    pub rotate_refresh_tokens: bool,

    /// Whether self-registration may request the admin role
    #[serde(default)]
    pub allow_admin_registration: bool,
}

impl AuthConfig {
    /// Create with the given JWT configuration and default flow settings
    pub fn new(jwt: JwtConfig) -> Self {
        Self {
            jwt,
            allow_registration: default_allow_registration(),
            rotate_refresh_tokens: false,
            allow_admin_registration: false,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt = JwtConfig::from_env()?;
        jwt.validate()?;

        Ok(Self {
            jwt,
            allow_registration: env_or("AUTH_ALLOW_REGISTRATION", default_allow_registration())?,
            rotate_refresh_tokens: env_or("AUTH_ROTATE_REFRESH_TOKENS", false)?,
            allow_admin_registration: env_or("AUTH_ALLOW_ADMIN_REGISTRATION", false)?,
        })
    }
}

fn default_allow_registration() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::new("c2VjcmV0");
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604_800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let mut config = JwtConfig::new("my-secret");
        config.refresh_token_expiry = config.access_token_expiry;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "JWT_REFRESH_TOKEN_EXPIRY"));
    }

    #[test]
    fn test_non_positive_access_expiry_rejected() {
        let mut config = JwtConfig::new("my-secret");
        config.access_token_expiry = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_expiry_rejected() {
        let mut config = JwtConfig::new("my-secret");
        config.refresh_token_expiry = 1_000_000_000_000_000;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "JWT_REFRESH_TOKEN_EXPIRY"));

        config.refresh_token_expiry = MAX_TOKEN_EXPIRY;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_secret_not_serialized() {
        let config = AuthConfig::new(JwtConfig::new("super-secret-value"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret-value"));
        assert!(json.contains("\"allow_registration\":true"));
        assert!(json.contains("\"allow_admin_registration\":false"));
    }
}
