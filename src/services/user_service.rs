use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};
use sqlx::PgPool;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const USER_EXISTS: &str = "User already exists";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        if self.get_by_username(username).await?.is_some() {
            return Err(Error::BadRequest(USER_EXISTS.to_string()));
        }

        let password_hash =
            hash_password(password).map_err(|e| Error::Internal(format!("hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            // Lost a race with a concurrent registration of the same name.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::BadRequest(USER_EXISTS.to_string())
            }
            other => Error::from(other),
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Verifies credentials. Every failure yields the same error so callers
    /// cannot tell a missing user from a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let Some(user) = self.get_by_username(username).await? else {
            return Err(invalid_credentials());
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => Ok(user),
            Ok(false) => Err(invalid_credentials()),
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "stored password hash is unreadable");
                Err(invalid_credentials())
            }
        }
    }
}

fn invalid_credentials() -> Error {
    Error::Unauthorized(INVALID_CREDENTIALS.to_string())
}
