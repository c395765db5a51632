use actix_web::{web, HttpRequest, HttpResponse};

use ks_core::repositories::UserRepository;
use ks_core::services::password::PasswordHasher;

use crate::dto::auth_dto::MeResponse;
use crate::handlers::{handle_domain_error, Language};
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Requires a bearer access token. Authorities are read from the credential
/// store, so a deleted account is rejected even while its token is live.
pub async fn me<U, P>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
{
    let lang = Language::from_request(&req);

    match state.auth_service.load_identity(&auth.subject).await {
        Ok(identity) => HttpResponse::Ok().json(MeResponse {
            username: identity.subject,
            authorities: identity.authorities,
        }),
        Err(error) => handle_domain_error(error, lang),
    }
}
