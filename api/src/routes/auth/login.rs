use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ks_core::domain::value_objects::SecurityContext;
use ks_core::repositories::UserRepository;
use ks_core::services::password::PasswordHasher;

use crate::dto::auth_dto::{LoginRequest, TokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response, Language};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "token_type": "Bearer"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failure
/// - 401 Unauthorized: Unknown user or wrong password (indistinguishable)
pub async fn login<U, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
{
    let lang = Language::from_request(&req);

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    let mut ctx = SecurityContext::new();
    match state
        .auth_service
        .login(&mut ctx, &request.username, &request.password)
        .await
    {
        Ok(tokens) => {
            if let Some(principal) = ctx.principal() {
                log::info!("Issued tokens for {}", principal.subject);
            }
            HttpResponse::Ok().json(TokenResponse::from(tokens))
        }
        Err(error) => handle_domain_error(error, lang),
    }
}
