//! PostgreSQL connection pool for the user directory backend.
//!
//! The connection string is read from `DATABASE_URL`. The pool is created
//! once at startup and shared through the application state; the gateway's
//! request path never touches it.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails. This runs
/// once during startup, before the server accepts traffic.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
