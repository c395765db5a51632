//! Token purpose classification

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::codec::TokenCodec;

/// Answers questions about a presented token
///
/// Every answer goes through a full verification first; a token that fails
/// to verify is never a refresh token and has no subject.
#[derive(Clone, Debug)]
pub struct TokenClassifier {
    codec: TokenCodec,
}

impl TokenClassifier {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// True iff the token verifies and carries the refresh discriminator
    pub fn is_refresh_token(&self, token: &str) -> bool {
        self.codec
            .decode(token)
            .map(|claims| claims.is_refresh())
            .unwrap_or(false)
    }

    /// Subject of a verified token, `None` on any failure
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.codec.decode(token).ok().map(|claims| claims.sub)
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        self.codec.decode(token).is_ok()
    }

    /// True iff the token verifies and was issued to `identity`
    pub fn is_token_for(&self, token: &str, identity: &Identity) -> bool {
        self.codec
            .decode(token)
            .map(|claims| claims.sub == identity.subject)
            .unwrap_or(false)
    }

    /// Verifies a token presented as a bearer credential
    ///
    /// Refresh tokens are rejected with `TokenError::NotAccessToken`.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.codec.decode(token)?;
        if claims.is_refresh() {
            tracing::debug!("Refresh token presented as access token");
            return Err(TokenError::NotAccessToken);
        }
        Ok(claims)
    }
}
