//! MySQL implementation of the UserRepository trait.
//!
//! Reads and writes the `users` table (see `migrations/`). Usernames are
//! unique at the schema level; a unique-key violation on insert is reported
//! as `UserAlreadyExists`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ks_core::domain::entities::user::{Role, User};
use ks_core::errors::{AuthError, DomainError};
use ks_core::repositories::UserRepository;

use crate::InfrastructureError;

const USER_COLUMNS: &str = "id, full_name, username, password_hash, role, created_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, InfrastructureError> {
        let id: String = row.try_get("id")?;
        let role: String = row.try_get("role")?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| InfrastructureError::Config(format!("Invalid user UUID: {}", e)))?,
            full_name: row.try_get("full_name")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            role: role.parse::<Role>().map_err(InfrastructureError::Config)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE username = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?) AS found")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        let found: i64 = row.try_get("found").map_err(InfrastructureError::from)?;
        Ok(found == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, full_name, username, password_hash, role, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.full_name)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create user");
                Err(InfrastructureError::from(e).into())
            }
        }
    }
}
