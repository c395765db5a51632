//! Unit tests for token service construction and issuance

use chrono::Duration;

use super::{raw_payload, secret_of, test_config, test_service};
use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;
use crate::services::token::{TokenService, TokenServiceConfig};

#[test]
fn test_new_rejects_short_secret() {
    let result = TokenService::new(TokenServiceConfig::new(secret_of(1, 16)));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_new_rejects_missing_secret() {
    let result = TokenService::new(TokenServiceConfig::new(""));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_new_rejects_refresh_not_outliving_access() {
    let equal = test_config()
        .with_access_token_expiry(Duration::minutes(15))
        .with_refresh_token_expiry(Duration::minutes(15));
    assert!(matches!(
        TokenService::new(equal),
        Err(DomainError::Configuration { .. })
    ));

    let shorter = test_config()
        .with_access_token_expiry(Duration::hours(1))
        .with_refresh_token_expiry(Duration::minutes(30));
    assert!(matches!(
        TokenService::new(shorter),
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_new_rejects_non_positive_expiry() {
    let config = test_config().with_access_token_expiry(Duration::zero());
    assert!(matches!(
        TokenService::new(config),
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_config_from_jwt_config() {
    let jwt = ks_shared::JwtConfig::new(secret_of(4, 48));
    let config = TokenServiceConfig::try_from(&jwt).unwrap();

    assert_eq!(config.access_token_expiry, Duration::seconds(900));
    assert_eq!(config.refresh_token_expiry, Duration::seconds(604_800));

    let service = TokenService::new(config).unwrap();
    assert_eq!(service.signing_key().algorithm(), jsonwebtoken::Algorithm::HS384);
}

#[test]
fn test_new_rejects_oversized_expiry() {
    let config = test_config().with_refresh_token_expiry(Duration::seconds(1_000_000_000_000_000));
    assert!(matches!(
        TokenService::new(config),
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_config_from_jwt_config_out_of_range() {
    let mut jwt = ks_shared::JwtConfig::new(secret_of(4, 48));
    jwt.refresh_token_expiry = i64::MAX;

    assert!(matches!(
        TokenServiceConfig::try_from(&jwt),
        Err(DomainError::Configuration { .. })
    ));
}

#[test]
fn test_config_debug_hides_secret() {
    let config = test_config();
    assert!(!format!("{:?}", config).contains(&config.secret));
}

#[test]
fn test_issued_pair_uses_independent_expiries() {
    let service = test_service();
    let identity = Identity::new("alice", vec!["ROLE_USER".to_string()]);
    let pair = service.generate_tokens(&identity).unwrap();

    let access = service.decode(&pair.access_token).unwrap();
    let refresh = service.decode(&pair.refresh_token).unwrap();

    assert_eq!(access.exp - access.iat, 15 * 60);
    assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
    assert!(refresh.exp > access.exp);

    assert!(raw_payload(&pair.access_token).get("tokenType").is_none());
    assert_eq!(raw_payload(&pair.refresh_token)["tokenType"], "refresh");
}

#[test]
fn test_service_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenService>();

    let service = std::sync::Arc::new(test_service());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || {
                let identity = Identity::new(format!("user{}", i), vec![]);
                let token = service.generate_access_token(&identity).unwrap();
                service.extract_subject(&token)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(format!("user{}", i)));
    }
}
