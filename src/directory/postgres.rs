//! PostgreSQL-backed user directory.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::UserDirectory;
use super::model::UserRecord;

/// Looks users up in the portal's `users` table.
#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password: String,
    name: String,
    role: String,
}

#[async_trait]
impl UserDirectory for PgDirectory {
    async fn lookup(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password, name, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            Ok(UserRecord {
                id: row.id,
                email: row.email,
                password_hash: row.password,
                display_name: row.name,
                role: row.role.parse()?,
            })
        })
        .transpose()
    }
}
