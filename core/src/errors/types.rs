//! Domain-specific error types for token and authentication operations
//!
//! Messages are bilingual (English | Chinese); use the `extract_*` helpers to
//! pick one half.

use ks_shared::ErrorResponse;
use thiserror::Error;

/// Why a token failed verification
///
/// Internal detail only: callers must treat every reason the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// Not three base64url segments, bad header, or unreadable payload
    Malformed,
    /// Signature does not verify under the active key, or the algorithm is not the key's
    SignatureMismatch,
    /// Past its `exp` claim
    Expired,
}

impl std::fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTokenReason::Malformed => f.write_str("malformed"),
            InvalidTokenReason::SignatureMismatch => f.write_str("signature-mismatch"),
            InvalidTokenReason::Expired => f.write_str("expired"),
        }
    }
}

/// Authentication-related errors with bilingual messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are deliberately indistinguishable
    #[error("Invalid username or password | 用户名或密码错误")]
    AuthenticationFailed,

    #[error("User not found | 用户不存在")]
    UserNotFound,

    #[error("User already exists | 用户已存在")]
    UserAlreadyExists,

    #[error("Registration is currently disabled | 注册功能暂时关闭")]
    RegistrationDisabled,

    #[error("Requested role cannot be self-assigned | 不能自行申请该角色")]
    RoleNotAllowed,
}

/// Token-related errors with bilingual messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Verification failed; the display text does not reveal the reason
    #[error("Invalid or expired token | 令牌无效或已过期")]
    Invalid { reason: InvalidTokenReason },

    #[error("Invalid refresh token | 无效的刷新令牌")]
    NotRefreshToken,

    #[error("Refresh tokens cannot authorize requests | 刷新令牌不能用于访问接口")]
    NotAccessToken,

    #[error("Token generation failed | 令牌生成失败")]
    GenerationFailed,
}

impl TokenError {
    pub fn invalid(reason: InvalidTokenReason) -> Self {
        TokenError::Invalid { reason }
    }
}

impl AuthError {
    /// Error code for programmatic handling and internal logs
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::RegistrationDisabled => "REGISTRATION_DISABLED",
            AuthError::RoleNotAllowed => "ROLE_NOT_ALLOWED",
        }
    }
}

impl TokenError {
    /// Error code for programmatic handling and internal logs
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Invalid { .. } => "TOKEN_INVALID",
            TokenError::NotRefreshToken => "INVALID_REFRESH_TOKEN",
            TokenError::NotAccessToken => "NOT_ACCESS_TOKEN",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

/// Helper function to extract English message from bilingual error
pub fn extract_english_message(message: &str) -> &str {
    message.split(" | ").next().unwrap_or(message)
}

/// Helper function to extract Chinese message from bilingual error
pub fn extract_chinese_message(message: &str) -> &str {
    message.split(" | ").nth(1).unwrap_or(message)
}
