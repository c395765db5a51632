//! Application factory
//!
//! Builds the actix-web `App` from shared state. `main` and the integration
//! tests both go through [`create_app`].

use std::sync::Arc;

use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse};

use ks_core::repositories::UserRepository;
use ks_core::services::password::PasswordHasher;
use ks_shared::{error_codes, ErrorResponse};

use crate::handlers::{bad_request_response, Language};
use crate::middleware::JwtAuth;
use crate::routes::auth::{login, me, refresh_token, register, AppState};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    app_state: web::Data<AppState<U, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
{
    let token_service = Arc::clone(app_state.auth_service.token_service());
    let database = app_state.database.clone().map(web::Data::new);

    let app = App::new().app_data(app_state);
    let app = match database {
        Some(database) => app.app_data(database),
        None => app,
    };

    app
        .app_data(json_config())
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, P>))
                    .route("/login", web::post().to(login::<U, P>))
                    .route("/refresh-token", web::post().to(refresh_token::<U, P>))
                    .service(
                        web::resource("/me")
                            .wrap(JwtAuth::new(token_service))
                            .route(web::get().to(me::<U, P>)),
                    ),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// JSON extractor configuration answering malformed bodies with an `ErrorResponse`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, req| {
            log::debug!("Rejected request body: {}", err);
            InternalError::from_response(err, bad_request_response(Language::from_request(req)))
                .into()
        })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
