//! The user directory seam.
//!
//! Record storage is owned by an external system; Classgate only ever asks
//! it one question: "which user, if any, has this email?". The
//! [`UserDirectory`] trait captures that question so the gateway can be
//! wired to PostgreSQL in production and to an in-memory table in tests.

use async_trait::async_trait;

pub mod model;
pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use model::{Role, UserRecord};

/// Read-only lookup into the externally owned user store.
///
/// A lookup miss is `Ok(None)`; `Err` means the backing store itself failed
/// and surfaces to the caller as a 500. Lookups are never retried.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug {
    async fn lookup(&self, email: &str) -> anyhow::Result<Option<UserRecord>>;
}
