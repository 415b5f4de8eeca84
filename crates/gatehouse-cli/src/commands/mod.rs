//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod config;
pub mod serve;
pub mod user;

use crate::output::OutputFormat;
use gatehouse_core::{AuthService, Database, SqliteCredentialStore};

/// Shared context for all commands
pub struct Context {
    pub db: Database,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Auth service over this context's database
    pub fn auth(&self) -> AuthService<SqliteCredentialStore> {
        AuthService::new(SqliteCredentialStore::from(&self.db))
    }
}
