//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Name of the claim that marks a refresh token
pub const TOKEN_TYPE_CLAIM: &str = "tokenType";

/// Value of the discriminator claim on refresh tokens
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Purpose of a token, carried by the discriminator claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Short-lived token authorizing API calls; has no discriminator claim
    Access,
    /// Longer-lived token used only to obtain new access tokens
    Refresh,
}

impl TokenType {
    /// Value written to the discriminator claim, if any
    pub fn claim_value(&self) -> Option<&'static str> {
        match self {
            TokenType::Access => None,
            TokenType::Refresh => Some(REFRESH_TOKEN_TYPE),
        }
    }

    /// Reads the discriminator claim; anything other than `refresh` is an access token
    pub fn from_claim_value(value: Option<&str>) -> Self {
        match value {
            Some(REFRESH_TOKEN_TYPE) => TokenType::Refresh,
            _ => TokenType::Access,
        }
    }
}

/// Claims a caller asks to have signed, before timestamps are stamped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    /// Subject (identity identifier)
    pub subject: String,
    /// Token purpose
    pub token_type: TokenType,
}

impl ClaimSet {
    /// Claims for an access token: subject only
    pub fn access(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            token_type: TokenType::Access,
        }
    }

    /// Claims for a refresh token: subject plus discriminator
    pub fn refresh(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            token_type: TokenType::Refresh,
        }
    }
}

/// Verified claims of a decoded token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Issued at, seconds since the epoch
    pub iat: i64,

    /// Expiration, seconds since the epoch
    pub exp: i64,

    /// Unique token id; two tokens minted in the same second still differ
    pub jti: Option<String>,

    /// Token purpose from the discriminator claim
    pub token_type: TokenType,
}

impl Claims {
    /// Subject of the token
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn is_refresh(&self) -> bool {
        self.token_type == TokenType::Refresh
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Checks whether the token is past its expiration at `now`
    ///
    /// Expiration is a whole second; the token is live strictly before it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.exp.saturating_mul(1000)
    }
}

/// Payload as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(rename = "tokenType", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl From<&Claims> for WireClaims {
    fn from(claims: &Claims) -> Self {
        Self {
            sub: claims.sub.clone(),
            iat: claims.iat,
            exp: claims.exp,
            jti: claims.jti.clone(),
            token_type: claims.token_type.claim_value().map(str::to_string),
        }
    }
}

impl From<WireClaims> for Claims {
    fn from(wire: WireClaims) -> Self {
        Self {
            token_type: TokenType::from_claim_value(wire.token_type.as_deref()),
            sub: wire.sub,
            iat: wire.iat,
            exp: wire.exp,
            jti: wire.jti,
        }
    }
}

/// One access token and one refresh token, handed to the caller together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
