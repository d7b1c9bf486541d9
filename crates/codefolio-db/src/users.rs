//! Database operations for the `users` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub public_id: Uuid,
    pub handle: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inserts a new user and returns the created row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails (including a duplicate
/// handle).
pub async fn create_user(
    pool: &PgPool,
    handle: &str,
    display_name: Option<&str>,
) -> Result<UserRow, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (handle, display_name) \
         VALUES ($1, $2) \
         RETURNING id, public_id, handle, display_name, created_at, updated_at",
    )
    .bind(handle)
    .bind(display_name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Returns a user by public UUID, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_user_by_public_id(
    pool: &PgPool,
    public_id: Uuid,
) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, public_id, handle, display_name, created_at, updated_at \
         FROM users \
         WHERE public_id = $1",
    )
    .bind(public_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Returns a user by handle, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_user_by_handle(pool: &PgPool, handle: &str) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, public_id, handle, display_name, created_at, updated_at \
         FROM users \
         WHERE handle = $1",
    )
    .bind(handle)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
