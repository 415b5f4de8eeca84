//! Auth module tests
//!
//! Unit tests over the in-memory store plus a few purpose-built mock stores.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::service::AuthService;
use crate::error::{Error, Result, ValidationError};
use crate::models::{NewUser, User};
use crate::store::{CredentialStore, InMemoryCredentialStore};

// ============================================================================
// Helpers
// ============================================================================

fn service() -> AuthService<InMemoryCredentialStore> {
    AuthService::new(InMemoryCredentialStore::new())
}

/// Store that always misses on lookup but rejects every insert, as if another
/// request had inserted the same username in between.
struct RacingStore {
    saves: AtomicUsize,
}

#[async_trait]
impl CredentialStore for RacingStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>> {
        Ok(None)
    }

    async fn save(&self, _user: NewUser) -> Result<User> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(Error::constraint("UNIQUE constraint failed: users.username"))
    }
}

/// Store whose backing database is unreachable
struct BrokenStore;

#[async_trait]
impl CredentialStore for BrokenStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }

    async fn save(&self, _user: NewUser) -> Result<User> {
        Err(Error::Database(sqlx::Error::PoolTimedOut))
    }
}

// ============================================================================
// register Tests
// ============================================================================

#[tokio::test]
async fn test_register_then_login_success() {
    let auth = service();

    let user = auth.register("validuser", "correctpw").await.unwrap();
    assert_eq!(user.username, "validuser");
    assert_eq!(user.password, "correctpw");

    let logged_in = auth.login("validuser", "correctpw").await.unwrap();
    assert_eq!(logged_in, user);
}

#[tokio::test]
async fn test_register_username_too_short() {
    let auth = service();

    let result = auth.register("ab", "validpass").await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::LengthConstraint))
    ));
    assert!(auth.store().is_empty());
}

#[tokio::test]
async fn test_register_password_too_short() {
    let auth = service();

    let result = auth.register("validuser", "short").await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::LengthConstraint))
    ));
}

#[tokio::test]
async fn test_register_minimum_lengths_accepted() {
    let auth = service();
    assert!(auth.register("abc", "123456").await.is_ok());
}

#[tokio::test]
async fn test_register_lengths_count_characters_not_bytes() {
    let auth = service();

    // Two characters, six bytes
    let result = auth.register("éé", "password").await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::LengthConstraint))
    ));

    // Six characters, more than six bytes
    assert!(auth.register("ééé", "ûûûûûû").await.is_ok());
}

#[tokio::test]
async fn test_register_astral_characters_count_once() {
    let auth = service();

    // Two emoji: 2 chars, 4 UTF-16 units, 8 bytes
    let result = auth.register("😀😀", "password").await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::LengthConstraint))
    ));

    assert!(auth.register("😀😀😀", "password").await.is_ok());
}

#[tokio::test]
async fn test_register_empty_credentials() {
    let auth = service();

    let result = auth.register("", "").await;
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::EmptyCredentials))
    ));

    let result = auth.register("validuser", "").await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Username and password cannot be empty"
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let auth = service();
    let first = auth.register("existing", "password123").await.unwrap();

    let result = auth.register("existing", "different-pw").await;

    assert!(matches!(result, Err(Error::AlreadyExists)));
    assert_eq!(result.unwrap_err().to_string(), "User already exists");

    // First registration is untouched
    let stored = auth.store().find_by_username("existing").await.unwrap();
    assert_eq!(stored, Some(first));
    assert!(auth.login("existing", "password123").await.is_ok());
}

#[tokio::test]
async fn test_register_existence_checked_before_validation() {
    let auth = service();
    auth.register("taken", "password123").await.unwrap();

    // Empty password would fail validation, but the existing user wins
    let result = auth.register("taken", "").await;
    assert!(matches!(result, Err(Error::AlreadyExists)));
}

#[tokio::test]
async fn test_register_usernames_are_case_sensitive() {
    let auth = service();
    auth.register("Alice", "password123").await.unwrap();

    assert!(auth.register("alice", "password456").await.is_ok());
    assert!(auth.login("alice", "password123").await.is_err());
}

#[tokio::test]
async fn test_register_lost_race_reports_already_exists() {
    let store = RacingStore {
        saves: AtomicUsize::new(0),
    };
    let auth = AuthService::new(store);

    let result = auth.register("newuser", "password123").await;

    assert!(matches!(result, Err(Error::AlreadyExists)));
    assert_eq!(auth.store().saves.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_register_concurrent_duplicates_single_winner() {
    let auth = AuthService::new(Arc::new(InMemoryCredentialStore::new()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let auth = auth.clone();
        handles.push(tokio::spawn(async move {
            auth.register("racer", "password123").await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => assert!(matches!(e, Error::AlreadyExists)),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(auth.store().len(), 1);
}

#[tokio::test]
async fn test_register_propagates_store_failure() {
    let auth = AuthService::new(BrokenStore);

    let result = auth.register("newuser", "password123").await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert!(!err.is_client_error());
}

// ============================================================================
// login Tests
// ============================================================================

#[tokio::test]
async fn test_login_unknown_user() {
    let auth = service();

    let result = auth.login("nouser", "anything").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let auth = service();
    auth.register("validuser", "correctpw").await.unwrap();

    let result = auth.login("validuser", "wrongpassword").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
    assert_eq!(result.unwrap_err().to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_login_password_compared_exactly() {
    let auth = service();
    auth.register("validuser", "correctpw").await.unwrap();

    assert!(auth.login("validuser", "CorrectPW").await.is_err());
    assert!(auth.login("validuser", "correctpw ").await.is_err());
    assert!(auth.login("validuser", "correctpw").await.is_ok());
}

#[tokio::test]
async fn test_login_propagates_store_failure() {
    let auth = AuthService::new(BrokenStore);

    let result = auth.login("validuser", "correctpw").await;

    assert!(matches!(result, Err(Error::Database(_))));
}

// ============================================================================
// Store idempotence
// ============================================================================

#[tokio::test]
async fn test_find_by_username_repeatable() {
    let auth = service();
    auth.register("validuser", "correctpw").await.unwrap();

    let first = auth.store().find_by_username("validuser").await.unwrap();
    let second = auth.store().find_by_username("validuser").await.unwrap();
    assert_eq!(first, second);

    let missing_a = auth.store().find_by_username("ghost").await.unwrap();
    let missing_b = auth.store().find_by_username("ghost").await.unwrap();
    assert_eq!(missing_a, missing_b);
}
