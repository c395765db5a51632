mod classifier_tests;
mod service_tests;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Duration;

use super::{TokenService, TokenServiceConfig};

/// Base64url secret of `len` copies of `byte`
pub(super) fn secret_of(byte: u8, len: usize) -> String {
    URL_SAFE_NO_PAD.encode(vec![byte; len])
}

pub(super) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new(secret_of(0x5a, 32))
        .with_access_token_expiry(Duration::minutes(15))
        .with_refresh_token_expiry(Duration::days(7))
}

pub(super) fn test_service() -> TokenService {
    TokenService::new(test_config()).unwrap()
}

/// Decodes the payload segment without verifying anything
pub(super) fn raw_payload(token: &str) -> serde_json::Value {
    let segment = token.split('.').nth(1).unwrap();
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
