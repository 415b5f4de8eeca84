//! In-memory implementation of CredentialStore

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use super::CredentialStore;
use crate::error::{Error, Result};
use crate::models::{NewUser, User};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    next_id: i64,
}

/// Map-backed store; nothing survives the process
#[derive(Default)]
pub struct InMemoryCredentialStore {
    inner: Mutex<Inner>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.lock().users.get(username).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        let mut inner = self.lock();

        if inner.users.contains_key(&user.username) {
            return Err(Error::constraint(format!(
                "UNIQUE constraint failed: users.username ({})",
                user.username
            )));
        }

        inner.next_id += 1;
        let saved = User {
            id: inner.next_id,
            username: user.username,
            password: user.password,
            created_at: Utc::now(),
        };
        inner.users.insert(saved.username.clone(), saved.clone());
        Ok(saved)
    }
}
