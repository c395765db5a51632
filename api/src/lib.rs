//! # Keystone API
//!
//! actix-web transport for the Keystone token services: registration,
//! login, token refresh and a bearer-protected identity endpoint.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::auth::AppState;
