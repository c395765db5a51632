use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ks_core::repositories::UserRepository;
use ks_core::services::auth::NewUser;
use ks_core::services::password::PasswordHasher;

use crate::dto::auth_dto::{RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, validation_error_response, Language};

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "full_name": "Alice Doe",
///     "username": "alice",
///     "password": "correct horse",
///     "role": "USER"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failure
/// - 403 Forbidden: Registration disabled, or `"role": "ADMIN"` while
///   `AUTH_ALLOW_ADMIN_REGISTRATION` is off
/// - 409 Conflict: Username taken
pub async fn register<U, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
{
    let lang = Language::from_request(&req);

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, lang);
    }

    let request = request.into_inner();
    let new_user = NewUser::new(request.full_name, request.username, request.password)
        .with_role(request.role.unwrap_or_default());

    match state.auth_service.register(new_user).await {
        Ok(user) => HttpResponse::Created().json(RegisterResponse {
            message: "User registered successfully".to_string(),
            username: user.username,
        }),
        Err(error) => handle_domain_error(error, lang),
    }
}
