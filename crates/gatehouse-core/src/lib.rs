//! # gatehouse-core
//!
//! Core credential logic for Gatehouse - shared between the HTTP API and the CLI.
//!
//! This crate provides:
//! - Database connection and migrations (`db` module)
//! - The user model (`models` module)
//! - Credential persistence behind a trait (`store` module)
//! - Registration and login rules (`auth` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use auth::{AuthService, MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
pub use db::Database;
pub use error::{Error, Result, ValidationError};
pub use models::{NewUser, User, UserResponse};
pub use store::{CredentialStore, InMemoryCredentialStore, SqliteCredentialStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
