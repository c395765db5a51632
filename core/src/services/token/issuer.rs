//! Access/refresh token pair issuance

use chrono::Duration;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{ClaimSet, TokenPair};
use crate::errors::DomainError;

use super::codec::TokenCodec;

/// Mints token pairs with independent expiries
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    codec: TokenCodec,
    access_token_expiry: Duration,
    refresh_token_expiry: Duration,
}

impl TokenIssuer {
    pub fn new(
        codec: TokenCodec,
        access_token_expiry: Duration,
        refresh_token_expiry: Duration,
    ) -> Self {
        debug_assert!(
            refresh_token_expiry > access_token_expiry,
            "refresh token must outlive access token"
        );
        Self {
            codec,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Issues an access token (subject only) and a refresh token (subject plus discriminator)
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_only(identity)?;
        let refresh_token = self.issue_refresh_only(identity)?;

        tracing::debug!(subject = %identity.subject, "Issued token pair");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    pub fn issue_access_only(&self, identity: &Identity) -> Result<String, DomainError> {
        self.codec.encode(
            &ClaimSet::access(identity.subject.clone()),
            self.access_token_expiry,
        )
    }

    pub(crate) fn issue_refresh_only(&self, identity: &Identity) -> Result<String, DomainError> {
        self.codec.encode(
            &ClaimSet::refresh(identity.subject.clone()),
            self.refresh_token_expiry,
        )
    }

    pub fn access_token_expiry(&self) -> Duration {
        self.access_token_expiry
    }

    pub fn refresh_token_expiry(&self) -> Duration {
        self.refresh_token_expiry
    }
}
