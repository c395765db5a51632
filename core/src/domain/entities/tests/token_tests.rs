//! Unit tests for token entities

use chrono::{Duration, Utc};

use crate::domain::entities::token::{Claims, ClaimSet, TokenPair, TokenType, WireClaims};

fn claims_expiring_in(token_type: TokenType, seconds: i64) -> Claims {
    let now = Utc::now();
    Claims {
        sub: "alice".to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(seconds)).timestamp(),
        jti: Some("0b6f3c1e-6d52-4a59-9a43-1f2d7c0e8a11".to_string()),
        token_type,
    }
}

#[test]
fn test_claim_set_constructors() {
    let access = ClaimSet::access("alice");
    assert_eq!(access.subject, "alice");
    assert_eq!(access.token_type, TokenType::Access);

    let refresh = ClaimSet::refresh("alice");
    assert_eq!(refresh.token_type, TokenType::Refresh);
}

#[test]
fn test_discriminator_values() {
    assert_eq!(TokenType::Access.claim_value(), None);
    assert_eq!(TokenType::Refresh.claim_value(), Some("refresh"));

    assert_eq!(TokenType::from_claim_value(Some("refresh")), TokenType::Refresh);
    assert_eq!(TokenType::from_claim_value(None), TokenType::Access);
    assert_eq!(TokenType::from_claim_value(Some("access")), TokenType::Access);
    assert_eq!(TokenType::from_claim_value(Some("REFRESH")), TokenType::Access);
}

#[test]
fn test_access_payload_has_no_discriminator() {
    let claims = claims_expiring_in(TokenType::Access, 60);
    let json = serde_json::to_value(WireClaims::from(&claims)).unwrap();

    assert_eq!(json["sub"], "alice");
    assert_eq!(json["jti"], "0b6f3c1e-6d52-4a59-9a43-1f2d7c0e8a11");
    assert!(json.get("tokenType").is_none());
}

#[test]
fn test_wire_payload_without_jti() {
    let wire: WireClaims = serde_json::from_str(r#"{"sub":"alice","iat":1,"exp":2}"#).unwrap();
    let claims = Claims::from(wire);
    assert_eq!(claims.jti, None);

    let json = serde_json::to_value(WireClaims::from(&claims)).unwrap();
    assert!(json.get("jti").is_none());
}

#[test]
fn test_refresh_payload_carries_discriminator() {
    let claims = claims_expiring_in(TokenType::Refresh, 60);
    let json = serde_json::to_value(WireClaims::from(&claims)).unwrap();

    assert_eq!(json["tokenType"], "refresh");
}

#[test]
fn test_wire_payload_with_foreign_type_is_access() {
    let wire: WireClaims = serde_json::from_str(
        r#"{"sub":"alice","iat":1,"exp":2,"tokenType":"something-else"}"#,
    )
    .unwrap();
    let claims = Claims::from(wire);
    assert_eq!(claims.token_type, TokenType::Access);
    assert!(!claims.is_refresh());
}

#[test]
fn test_expiry_check() {
    let live = claims_expiring_in(TokenType::Access, 60);
    assert!(!live.is_expired_at(Utc::now()));

    let stale = claims_expiring_in(TokenType::Access, -1);
    assert!(stale.is_expired_at(Utc::now()));

    // Exactly at the expiration second the token is no longer live
    let boundary = Claims { exp: live.iat, ..live.clone() };
    let at_exp = chrono::DateTime::from_timestamp(boundary.exp, 0).unwrap();
    assert!(boundary.is_expired_at(at_exp));
}

#[test]
fn test_timestamps_convert() {
    let claims = claims_expiring_in(TokenType::Refresh, 3600);
    let issued = claims.issued_at().unwrap();
    let expires = claims.expires_at().unwrap();
    assert_eq!((expires - issued).num_seconds(), 3600);
}

#[test]
fn test_token_pair_serialization() {
    let pair = TokenPair::new("a.b.c".to_string(), "d.e.f".to_string());
    let json = serde_json::to_value(&pair).unwrap();
    assert_eq!(json["access_token"], "a.b.c");
    assert_eq!(json["refresh_token"], "d.e.f");
}
