//! Authentication route handlers
//!
//! - Registration
//! - Username/password login
//! - Token refresh
//! - Current identity (bearer protected)

pub mod login;
pub mod me;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use ks_core::repositories::UserRepository;
use ks_core::services::auth::AuthService;
use ks_core::services::password::PasswordHasher;
use ks_infra::DatabasePool;

pub use login::login;
pub use me::me;
pub use refresh::refresh_token;
pub use register::register;

/// Application state that holds shared services
pub struct AppState<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, P>>,
    /// Pool behind the credential store, checked by `/health`; `None` for the in-memory store
    pub database: Option<DatabasePool>,
}

impl<U, P> AppState<U, P>
where
    U: UserRepository,
    P: PasswordHasher,
{
    pub fn new(auth_service: Arc<AuthService<U, P>>) -> Self {
        Self {
            auth_service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}
