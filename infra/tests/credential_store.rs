//! Login and refresh against the in-memory store with real bcrypt hashes

use std::sync::Arc;

use ks_core::domain::value_objects::SecurityContext;
use ks_core::errors::{AuthError, DomainError};
use ks_core::services::{AuthService, AuthServiceConfig, NewUser, TokenService, TokenServiceConfig};
use ks_infra::{BcryptPasswordHasher, InMemoryUserRepository};

const SECRET: &str = "a2V5c3RvbmUtaW50ZWdyYXRpb24tdGVzdC1zZWNyZXQtMDEyMzQ1Njc4OQ";

fn auth_service() -> AuthService<InMemoryUserRepository, BcryptPasswordHasher> {
    let tokens = TokenService::new(TokenServiceConfig::new(SECRET)).unwrap();
    AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4).unwrap()),
        Arc::new(tokens),
        AuthServiceConfig::default(),
    )
}

#[tokio::test]
async fn register_and_login_with_bcrypt() {
    let auth = auth_service();
    let user = auth
        .register(NewUser::new("Erin", "erin", "p@ssw0rd"))
        .await
        .unwrap();
    assert!(user.password_hash.starts_with("$2"));

    let mut ctx = SecurityContext::new();
    let pair = auth.login(&mut ctx, "erin", "p@ssw0rd").await.unwrap();
    assert_eq!(ctx.principal().map(|p| p.subject.as_str()), Some("erin"));

    let refreshed = auth.refresh(&pair.refresh_token).await.unwrap();
    assert_eq!(refreshed.refresh_token, pair.refresh_token);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_alike() {
    let auth = auth_service();
    auth.register(NewUser::new("Erin", "erin", "p@ssw0rd"))
        .await
        .unwrap();

    let mut ctx = SecurityContext::new();
    let wrong = auth.login(&mut ctx, "erin", "nope").await.unwrap_err();
    let unknown = auth.login(&mut ctx, "frank", "p@ssw0rd").await.unwrap_err();

    assert_eq!(wrong, DomainError::Auth(AuthError::AuthenticationFailed));
    assert_eq!(wrong, unknown);
    assert!(!ctx.is_authenticated());
}
