//! Symmetric signing key derived from the configured secret

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::errors::DomainError;

/// Minimum key length in bytes (256 bits, the HMAC-SHA256 minimum)
pub const MIN_KEY_BYTES: usize = 32;

/// HMAC signing key shared by encode and decode
///
/// Built once at start-up and never rotated.
#[derive(Clone)]
pub struct SigningKey {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    len: usize,
}

impl SigningKey {
    /// Derives the key from a base64url secret
    ///
    /// Trailing `=` padding is tolerated. The HMAC variant follows the key
    /// length: 64 bytes or more selects HS512, 48 or more HS384, otherwise HS256.
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` when the secret is empty, not base64url,
    /// or shorter than [`MIN_KEY_BYTES`] once decoded.
    pub fn from_base64url(secret: &str) -> Result<Self, DomainError> {
        let trimmed = secret.trim().trim_end_matches('=');
        if trimmed.is_empty() {
            return Err(DomainError::configuration("signing secret is empty"));
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(trimmed)
            .map_err(|_| DomainError::configuration("signing secret is not valid base64url"))?;

        Self::from_bytes(&bytes)
    }

    /// Builds the key from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < MIN_KEY_BYTES {
            return Err(DomainError::configuration(format!(
                "signing key is {} bits, at least {} bits are required",
                bytes.len() * 8,
                MIN_KEY_BYTES * 8
            )));
        }

        let algorithm = match bytes.len() {
            n if n >= 64 => Algorithm::HS512,
            n if n >= 48 => Algorithm::HS384,
            _ => Algorithm::HS256,
        };

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            len: bytes.len(),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &(self.len * 8))
            .finish_non_exhaustive()
    }
}
