//! Mapping of domain errors to HTTP responses
//!
//! Every authentication failure is answered with the same 401 body; the
//! distinguishing reason only reaches the server log.

use actix_web::{
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use ks_core::errors::{
    extract_chinese_message, extract_english_message, AuthError, DomainError, TokenError,
};
use ks_shared::{error_codes, ErrorResponse};

const UNAUTHORIZED_MESSAGE: &str = "Authentication failed | 身份验证失败";
const VALIDATION_MESSAGE: &str = "Request validation failed | 请求参数校验失败";
const INTERNAL_MESSAGE: &str = "An internal error occurred | 发生内部错误";

/// Language preference for error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Detect language preference from the Accept-Language header
    pub fn from_request(req: &HttpRequest) -> Self {
        req.headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Parse an Accept-Language value such as `zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7`
    pub fn from_header(header_value: &str) -> Self {
        let mut preferred = Language::English;
        let mut max_quality = 0.0_f32;

        for entry in header_value.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = if tag.starts_with("zh") {
                Language::Chinese
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = language;
                max_quality = quality;
            }
        }

        preferred
    }

    /// Pick this language's half of a bilingual `English | 中文` message
    pub fn localize<'a>(&self, message: &'a str) -> &'a str {
        match self {
            Language::English => extract_english_message(message),
            Language::Chinese => extract_chinese_message(message),
        }
    }
}

fn error_response(status: StatusCode, code: &str, message: &str, lang: Language) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, lang.localize(message)))
}

/// The uniform 401 answer for any authentication failure
pub fn unauthorized_response(lang: Language) -> HttpResponse {
    error_response(
        StatusCode::UNAUTHORIZED,
        error_codes::UNAUTHORIZED,
        UNAUTHORIZED_MESSAGE,
        lang,
    )
}

/// 400 answer listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors, lang: Language) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, lang.localize(VALIDATION_MESSAGE))
        .add_detail("fields", fields);
    HttpResponse::BadRequest().json(body)
}

/// 400 answer for a body that is not valid JSON for the endpoint
pub fn bad_request_response(lang: Language) -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::BAD_REQUEST,
        "Malformed request body | 请求体格式错误",
        lang,
    )
}

/// Reason string for the server log; never sent to the client
fn log_reason(error: &DomainError) -> String {
    match error {
        DomainError::Token(e @ TokenError::Invalid { reason }) => {
            format!("{} ({})", e.code(), reason)
        }
        DomainError::Token(e) => e.code().to_string(),
        DomainError::Auth(e) => e.code().to_string(),
        other => other.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, lang: Language) -> HttpResponse {
    if error.is_unauthorized() {
        log::warn!("Authentication rejected: {}", log_reason(&error));
        return unauthorized_response(lang);
    }

    match &error {
        DomainError::Auth(e @ AuthError::UserAlreadyExists) => {
            log::info!("Request conflict: {}", e.code());
            error_response(StatusCode::CONFLICT, error_codes::CONFLICT, &e.to_string(), lang)
        }
        DomainError::Auth(e @ (AuthError::RegistrationDisabled | AuthError::RoleNotAllowed)) => {
            error_response(StatusCode::FORBIDDEN, error_codes::FORBIDDEN, &e.to_string(), lang)
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            message.clone(),
        )),
        _ => {
            log::error!("Internal error: {}", log_reason(&error));
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE,
                lang,
            )
        }
    }
}
