//! Credential store
//!
//! Abstracts persistence of user records using trait-based dependency injection,
//! so the auth rules run unchanged over SQLite or an in-memory map.
//!
//! ## Structure
//! - `sqlite.rs` - Pool-backed implementation used by the API and CLI
//! - `memory.rs` - Map-backed implementation for tests and ephemeral runs

mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewUser, User};

pub use memory::InMemoryCredentialStore;
pub use sqlite::SqliteCredentialStore;

/// Credential store trait - durable access to users keyed by username
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find user by exact (case-sensitive) username.
    ///
    /// A missing user is `Ok(None)`, not an error.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Persist a new user and return the stored row.
    ///
    /// Fails with [`crate::Error::ConstraintViolation`] if the username is taken.
    async fn save(&self, user: NewUser) -> Result<User>;
}

#[async_trait]
impl<S: CredentialStore + ?Sized> CredentialStore for std::sync::Arc<S> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        (**self).find_by_username(username).await
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        (**self).save(user).await
    }
}
