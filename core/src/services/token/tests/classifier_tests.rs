//! Unit tests for token classification

use chrono::Duration;

use super::{secret_of, test_service};
use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::ClaimSet;
use crate::errors::{InvalidTokenReason, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn alice() -> Identity {
    Identity::new("alice", vec!["ROLE_USER".to_string()])
}

#[test]
fn test_type_discrimination() {
    let service = test_service();
    let pair = service.generate_tokens(&alice()).unwrap();

    assert!(service.is_refresh_token(&pair.refresh_token));
    assert!(!service.is_refresh_token(&pair.access_token));
}

#[test]
fn test_is_refresh_token_false_on_invalid_input() {
    let service = test_service();
    assert!(!service.is_refresh_token("not-a-token"));
    assert!(!service.is_refresh_token(""));
}

#[test]
fn test_refresh_from_other_key_is_not_refresh() {
    let other = TokenService::new(TokenServiceConfig::new(secret_of(3, 32))).unwrap();
    let pair = other.generate_tokens(&alice()).unwrap();

    assert!(!test_service().is_refresh_token(&pair.refresh_token));
}

#[test]
fn test_extract_subject() {
    let service = test_service();
    let pair = service.generate_tokens(&alice()).unwrap();

    assert_eq!(service.extract_subject(&pair.access_token).as_deref(), Some("alice"));
    assert_eq!(service.extract_subject(&pair.refresh_token).as_deref(), Some("alice"));
    assert_eq!(service.extract_subject("garbage"), None);
}

#[test]
fn test_extract_subject_none_when_expired() {
    let service = test_service();
    let token = service
        .encode(&ClaimSet::access("alice"), Duration::milliseconds(1))
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(10));

    assert_eq!(service.extract_subject(&token), None);
    assert!(!service.is_valid_token(&token));
}

#[test]
fn test_is_token_for() {
    let service = test_service();
    let token = service.generate_access_token(&alice()).unwrap();
    let bob = Identity::new("bob", vec![]);

    assert!(service.is_token_for(&token, &alice()));
    assert!(!service.is_token_for(&token, &bob));
    assert!(!service.is_token_for("garbage", &alice()));
}

#[test]
fn test_verify_access_token_rejects_refresh_token() {
    let service = test_service();
    let pair = service.generate_tokens(&alice()).unwrap();

    let claims = service.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.sub, "alice");

    assert_eq!(
        service.verify_access_token(&pair.refresh_token),
        Err(TokenError::NotAccessToken)
    );
    assert_eq!(
        service.verify_access_token("garbage"),
        Err(TokenError::invalid(InvalidTokenReason::Malformed))
    );
}
