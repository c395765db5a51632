//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{ClaimSet, Claims, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::classifier::TokenClassifier;
use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::key::SigningKey;

/// Facade over the signing key, codec, classifier and issuer
///
/// Built once at start-up and shared read-only (`Arc<TokenService>`) by every
/// request.
#[derive(Clone, Debug)]
pub struct TokenService {
    config: TokenServiceConfig,
    key: Arc<SigningKey>,
    codec: TokenCodec,
    classifier: TokenClassifier,
    issuer: TokenIssuer,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` if the secret
    /// cannot be turned into a key or the expiries are inconsistent
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let key = Arc::new(SigningKey::from_base64url(&config.secret)?);

        let codec = TokenCodec::new(Arc::clone(&key));
        let classifier = TokenClassifier::new(codec.clone());
        let issuer = TokenIssuer::new(
            codec.clone(),
            config.access_token_expiry,
            config.refresh_token_expiry,
        );

        tracing::info!(
            algorithm = ?key.algorithm(),
            access_expiry_secs = config.access_token_expiry.num_seconds(),
            refresh_expiry_secs = config.refresh_token_expiry.num_seconds(),
            "Token service initialized"
        );

        Ok(Self {
            config,
            key,
            codec,
            classifier,
            issuer,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.key
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Signs an arbitrary claim set with the given expiry
    pub fn encode(&self, claims: &ClaimSet, expiry: Duration) -> Result<String, DomainError> {
        self.codec.encode(claims, expiry)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.codec.decode(token)
    }

    /// Generates a new token pair (access + refresh tokens) for an identity
    pub fn generate_tokens(&self, identity: &Identity) -> Result<TokenPair, DomainError> {
        self.issuer.issue(identity)
    }

    pub fn generate_access_token(&self, identity: &Identity) -> Result<String, DomainError> {
        self.issuer.issue_access_only(identity)
    }

    pub(crate) fn generate_refresh_token(&self, identity: &Identity) -> Result<String, DomainError> {
        self.issuer.issue_refresh_only(identity)
    }

    pub fn is_refresh_token(&self, token: &str) -> bool {
        self.classifier.is_refresh_token(token)
    }

    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.classifier.extract_subject(token)
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        self.classifier.is_valid_token(token)
    }

    pub fn is_token_for(&self, token: &str, identity: &Identity) -> bool {
        self.classifier.is_token_for(token, identity)
    }

    /// Verifies a bearer token, rejecting refresh tokens
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.classifier.verify_access_token(token)
    }
}
