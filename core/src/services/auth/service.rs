//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::SecurityContext;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::types::NewUser;

/// Authentication service for login, refresh and registration
pub struct AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Password hasher shared with the credential store
    password_hasher: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, P> AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `password_hasher` - Hasher used for stored passwords
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }

    /// Authenticate a user by username and password
    ///
    /// On success the principal is stored in `ctx` and a fresh token pair is
    /// returned. Unknown usernames and wrong passwords fail identically.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Security context of the current request
    /// * `username` - Login name
    /// * `password` - Plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access and refresh tokens
    /// * `Err(DomainError::Auth(AuthenticationFailed))` - Bad credentials
    /// * `Err(DomainError::Internal)` - Credential store failure
    pub async fn login(
        &self,
        ctx: &mut SecurityContext,
        username: &str,
        password: &str,
    ) -> DomainResult<TokenPair> {
        // Step 1: Look up the user under the same normalization as registration
        let username = username.trim();
        let user = self.user_repository.find_by_username(username).await?;

        // Step 2: Verify the password, burning the same work when the user is unknown
        let user = match user {
            Some(user) => {
                if !self
                    .password_hasher
                    .verify(password, &user.password_hash)
                    .await?
                {
                    tracing::warn!(username = %username, "Login failed: bad credentials");
                    return Err(AuthError::AuthenticationFailed.into());
                }
                user
            }
            None => {
                self.password_hasher
                    .verify(password, self.password_hasher.dummy_hash())
                    .await?;
                tracing::warn!(username = %username, "Login failed: bad credentials");
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        // Step 3: Populate the security context
        let identity = user.identity();
        ctx.set_principal(identity.clone());

        // Step 4: Issue the token pair
        let tokens = self.token_service.generate_tokens(&identity)?;

        tracing::info!(username = %user.username, "User logged in");
        Ok(tokens)
    }

    /// Mint a new access token from a refresh token
    ///
    /// The presented refresh token is returned unchanged unless refresh
    /// token rotation is enabled.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New access token plus the refresh token
    /// * `Err(DomainError::Token(NotRefreshToken))` - Not a valid refresh token
    /// * `Err(DomainError::Auth(UserNotFound))` - Subject no longer exists
    pub async fn refresh(&self, presented: &str) -> DomainResult<TokenPair> {
        // Step 1: Only verified refresh tokens are accepted
        if !self.token_service.is_refresh_token(presented) {
            tracing::debug!("Refresh rejected: not a valid refresh token");
            return Err(TokenError::NotRefreshToken.into());
        }

        // Step 2: Resolve the subject against the credential store
        let subject = self
            .token_service
            .extract_subject(presented)
            .ok_or(TokenError::NotRefreshToken)?;

        let user = self
            .user_repository
            .find_by_username(&subject)
            .await?
            .ok_or_else(|| {
                tracing::warn!(subject = %subject, "Refresh rejected: user no longer exists");
                DomainError::Auth(AuthError::UserNotFound)
            })?;

        // Step 3: Mint the new access token
        let identity = user.identity();
        let access_token = self.token_service.generate_access_token(&identity)?;

        let refresh_token = if self.config.rotate_refresh_tokens {
            self.token_service.generate_refresh_token(&identity)?
        } else {
            presented.to_string()
        };

        tracing::debug!(subject = %subject, rotated = self.config.rotate_refresh_tokens, "Access token refreshed");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Resolve the identity behind a verified token subject
    ///
    /// Fails with `UserNotFound` when the account has been removed since the
    /// token was issued.
    pub async fn load_identity(&self, subject: &str) -> DomainResult<Identity> {
        self.user_repository
            .find_by_username(subject)
            .await?
            .map(|user| user.identity())
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(RegistrationDisabled))` - Registration switched off
    /// * `Err(DomainError::Auth(RoleNotAllowed))` - Admin role requested while admin self-registration is off
    /// * `Err(DomainError::Auth(UserAlreadyExists))` - Username taken
    /// * `Err(DomainError::Validation)` - Empty username or password
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        let username = new_user.username.trim();
        if username.is_empty() {
            return Err(DomainError::Validation {
                message: "username must not be empty".to_string(),
            });
        }
        if new_user.password.is_empty() {
            return Err(DomainError::Validation {
                message: "password must not be empty".to_string(),
            });
        }

        if new_user.role == Role::Admin && !self.config.allow_admin_registration {
            tracing::warn!(username = %username, "Registration rejected: admin role requested");
            return Err(AuthError::RoleNotAllowed.into());
        }

        if self.user_repository.exists_by_username(username).await? {
            tracing::info!(username = %username, "Registration rejected: username taken");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&new_user.password).await?;
        let user = User::new(
            new_user.full_name.trim(),
            username,
            password_hash,
            new_user.role,
        );

        let created = self.user_repository.create(user).await?;
        tracing::info!(username = %created.username, role = %created.role, "User registered");
        Ok(created)
    }
}
