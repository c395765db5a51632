//! Signed compact token encoding and verification

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{ClaimSet, Claims, WireClaims};
use crate::errors::{DomainError, InvalidTokenReason, TokenError};

use super::key::SigningKey;

/// Encodes claim sets into signed tokens and verifies tokens back into claims
#[derive(Clone, Debug)]
pub struct TokenCodec {
    key: Arc<SigningKey>,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(key: Arc<SigningKey>) -> Self {
        // Only the key's own algorithm is accepted
        let mut validation = Validation::new(key.algorithm());
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self { key, validation }
    }

    pub fn key(&self) -> &SigningKey {
        &self.key
    }

    /// Signs `claims` with `iat = now`, `exp = now + expiry` and a fresh `jti`
    ///
    /// Fails with a configuration error when `now + expiry` is out of range.
    ///
    /// # Panics
    ///
    /// Panics if `expiry` is not positive.
    pub fn encode(&self, claims: &ClaimSet, expiry: Duration) -> Result<String, DomainError> {
        assert!(expiry > Duration::zero(), "token expiry must be positive");

        let now = Utc::now();
        let expires_at = now.checked_add_signed(expiry).ok_or_else(|| {
            tracing::error!(expiry_secs = expiry.num_seconds(), "Token expiry out of range");
            DomainError::configuration("token expiry is out of range")
        })?;

        let payload = WireClaims::from(&Claims {
            sub: claims.subject.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
            token_type: claims.token_type,
        });

        encode(
            &Header::new(self.key.algorithm()),
            &payload,
            self.key.encoding_key(),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    /// Verifies the signature and expiry of `token` and returns its claims
    ///
    /// The payload is only read after the signature checks out. A token is
    /// live while the current time in milliseconds is below `exp * 1000`.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<WireClaims>(token, self.key.decoding_key(), &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        InvalidTokenReason::SignatureMismatch
                    }
                    _ => InvalidTokenReason::Malformed,
                };
                tracing::debug!(%reason, "Token verification failed");
                TokenError::invalid(reason)
            })?;

        let claims = Claims::from(data.claims);
        if claims.is_expired_at(Utc::now()) {
            tracing::debug!(reason = %InvalidTokenReason::Expired, "Token verification failed");
            return Err(TokenError::invalid(InvalidTokenReason::Expired));
        }

        Ok(claims)
    }
}
