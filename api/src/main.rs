use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{error, info};

use ks_api::{create_app, AppState};
use ks_core::repositories::UserRepository;
use ks_core::services::{AuthService, AuthServiceConfig, TokenService, TokenServiceConfig};
use ks_infra::{BcryptPasswordHasher, DatabasePool, InMemoryUserRepository, MySqlUserRepository};
use ks_shared::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let logging = LoggingConfig::from_env(Environment::from_env());
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(&logging.level));
    if !logging.timestamp {
        logger.format_timestamp(None);
    }
    logger.init();

    info!("Starting Keystone API Server");

    // Bad or missing signing configuration is fatal: there is no fallback key
    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;
    info!("Environment: {}", config.environment);

    let token_service = TokenServiceConfig::try_from(&config.auth.jwt)
        .and_then(TokenService::new)
        .map_err(|e| {
            error!("Failed to initialize token service: {}", e);
            e
        })?;

    let hasher = BcryptPasswordHasher::with_default_cost()
        .context("Failed to initialize password hasher")?;

    match &config.database {
        Some(db_config) => {
            let pool = DatabasePool::new(db_config)
                .await
                .context("Failed to connect to database")?;
            info!("Using MySQL credential store ({})", pool.get_statistics());
            let users = MySqlUserRepository::new(pool.get_pool().clone());
            let result = serve(&config, users, hasher, token_service, Some(pool.clone())).await;
            pool.close().await;
            result
        }
        None => {
            info!("DATABASE_URL not set, using in-memory credential store");
            serve(&config, InMemoryUserRepository::new(), hasher, token_service, None).await
        }
    }
}

async fn serve<U>(
    config: &AppConfig,
    users: U,
    hasher: BcryptPasswordHasher,
    token_service: TokenService,
    database: Option<DatabasePool>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
{
    let auth_service = AuthService::new(
        Arc::new(users),
        Arc::new(hasher),
        Arc::new(token_service),
        AuthServiceConfig::from(&config.auth),
    );
    let mut state = AppState::new(Arc::new(auth_service));
    if let Some(pool) = database {
        state = state.with_database(pool);
    }
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    Ok(())
}
