//! Auth business logic
//!
//! Core registration and login operations that are testable and independent of the framework.

use crate::error::{Error, Result, ValidationError};
use crate::models::{NewUser, User};
use crate::store::CredentialStore;

/// Minimum username length, in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates registration and login requests against a credential store.
///
/// Holds no state of its own beyond the store handle, so one instance can be
/// cloned or shared across concurrent requests.
#[derive(Clone)]
pub struct AuthService<S> {
    store: S,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new user.
    ///
    /// Checks run in a fixed order: an existing username is reported before
    /// empty or short credentials are. The store's own uniqueness constraint
    /// settles concurrent registrations of the same name; the loser sees
    /// [`Error::AlreadyExists`] just like a sequential duplicate.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        // Check if username already exists
        if self.store.find_by_username(username).await?.is_some() {
            log::warn!("Registration rejected for '{}': user already exists", username);
            return Err(Error::AlreadyExists);
        }

        if let Err(reason) = validate_credentials(username, password) {
            log::warn!("Registration rejected for '{}': {}", username, reason);
            return Err(reason.into());
        }

        let user = match self.store.save(NewUser::new(username, password)).await {
            Ok(user) => user,
            Err(Error::ConstraintViolation(detail)) => {
                log::warn!(
                    "Registration for '{}' lost a race to a concurrent insert: {}",
                    username,
                    detail
                );
                return Err(Error::AlreadyExists);
            }
            Err(e) => return Err(e),
        };

        log::info!("Registered user '{}' (id {})", user.username, user.id);
        Ok(user)
    }

    /// Log in with a username and password.
    ///
    /// Unknown usernames and wrong passwords are both reported as
    /// [`Error::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = match self.store.find_by_username(username).await? {
            Some(user) if user.password == password => user,
            Some(_) => {
                log::warn!("Login rejected for '{}': password mismatch", username);
                return Err(Error::InvalidCredentials);
            }
            None => {
                log::warn!("Login rejected for '{}': no such user", username);
                return Err(Error::InvalidCredentials);
            }
        };

        log::info!("User '{}' logged in", user.username);
        Ok(user)
    }
}

fn validate_credentials(
    username: &str,
    password: &str,
) -> std::result::Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::EmptyCredentials);
    }
    if username.chars().count() < MIN_USERNAME_LEN || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::LengthConstraint);
    }
    Ok(())
}
