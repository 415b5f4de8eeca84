//! Unified error handling for gatehouse-core

use thiserror::Error;

/// Why a registration request was rejected before reaching the store
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username and password cannot be empty")]
    EmptyCredentials,

    #[error("Username must be at least 3 characters and password at least 6 characters long")]
    LengthConstraint,
}

/// Core error type for gatehouse-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("User already exists")]
    AlreadyExists,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Raised by the storage layer when a write would break a uniqueness rule
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gatehouse-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Error::ConstraintViolation(msg.into())
    }

    /// True for failures caused by the request itself rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists | Error::Validation(_) | Error::InvalidCredentials
        )
    }
}
