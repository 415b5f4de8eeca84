//! SQLite implementation of CredentialStore

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::CredentialStore;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{NewUser, User};

/// SQLite implementation of CredentialStore
///
/// Each call checks a connection out of the pool for one statement; the pool
/// takes it back on every exit path.
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<&Database> for SqliteCredentialStore {
    fn from(db: &Database) -> Self {
        Self::new(db.pool.clone())
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        log::debug!("Looking up user '{}'", username);

        let user = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        let now = chrono::Utc::now();

        let saved: User = sqlx::query_as(
            r#"
            INSERT INTO users (username, password, created_at)
            VALUES (?, ?, ?)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::constraint(db_err.message().to_string())
            }
            other => Error::Database(other),
        })?;

        Ok(saved)
    }
}
