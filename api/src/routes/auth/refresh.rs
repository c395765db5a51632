use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ks_core::repositories::UserRepository;
use ks_core::services::password::PasswordHasher;

use crate::dto::auth_dto::{RefreshTokenRequest, TokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response, Language};

use super::AppState;

/// Handler for POST /api/v1/auth/refresh-token
///
/// Mints a new access token from a refresh token. The refresh token in the
/// response is the presented one unless rotation is enabled.
///
/// ## Errors
/// - 401 Unauthorized: Not a valid refresh token, or the user no longer exists
pub async fn refresh_token<U, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, P>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
{
    let lang = Language::from_request(&req);

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(tokens) => HttpResponse::Ok().json(TokenResponse::from(tokens)),
        Err(error) => handle_domain_error(error, lang),
    }
}
