//! In-memory user directory for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use super::UserDirectory;
use super::model::UserRecord;

/// A directory backed by a plain map keyed by email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: UserRecord) {
        self.users.insert(user.email.clone(), user);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn lookup(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
        Ok(self.users.get(email).cloned())
    }
}

/// A directory whose backing store is always down.
///
/// Used to exercise the 500 path without a real database outage.
#[derive(Debug, Clone, Default)]
pub struct FailingDirectory;

#[async_trait]
impl UserDirectory for FailingDirectory {
    async fn lookup(&self, _email: &str) -> anyhow::Result<Option<UserRecord>> {
        Err(anyhow::anyhow!("user directory unavailable"))
    }
}
