//! Database operations for the `profile_links` table.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use codefolio_core::Platform;
use sqlx::PgPool;

use crate::DbError;

/// A declared profile link: the raw URL a user pasted for one platform.
#[derive(Debug, Clone)]
pub struct ProfileLinkRow {
    pub id: i64,
    pub user_id: i64,
    pub platform: Platform,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

/// Raw shape before the platform tag is parsed.
#[derive(Debug, sqlx::FromRow)]
struct RawLinkRow {
    id: i64,
    user_id: i64,
    platform: String,
    url: String,
    updated_at: DateTime<Utc>,
}

impl RawLinkRow {
    fn into_link(self) -> Result<ProfileLinkRow, DbError> {
        let platform = Platform::from_str(&self.platform)
            .map_err(|_| DbError::UnknownPlatform(self.platform.clone()))?;
        Ok(ProfileLinkRow {
            id: self.id,
            user_id: self.user_id,
            platform,
            url: self.url,
            updated_at: self.updated_at,
        })
    }
}

/// Returns all of a user's links, ordered by platform tag.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::UnknownPlatform`] if a stored tag no longer parses.
pub async fn list_links(pool: &PgPool, user_id: i64) -> Result<Vec<ProfileLinkRow>, DbError> {
    let rows = sqlx::query_as::<_, RawLinkRow>(
        "SELECT id, user_id, platform, url, updated_at \
         FROM profile_links \
         WHERE user_id = $1 \
         ORDER BY platform",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(RawLinkRow::into_link).collect()
}

/// Returns the user's links as a platform → URL map, the shape the refresh
/// orchestrator consumes.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::UnknownPlatform`] if a stored tag no longer parses.
pub async fn link_map(pool: &PgPool, user_id: i64) -> Result<HashMap<Platform, String>, DbError> {
    let links = list_links(pool, user_id).await?;
    Ok(links
        .into_iter()
        .map(|link| (link.platform, link.url))
        .collect())
}

/// Returns one link, or `None` if the platform has no link configured.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::UnknownPlatform`] if the stored tag no longer parses.
pub async fn get_link(
    pool: &PgPool,
    user_id: i64,
    platform: Platform,
) -> Result<Option<ProfileLinkRow>, DbError> {
    let row = sqlx::query_as::<_, RawLinkRow>(
        "SELECT id, user_id, platform, url, updated_at \
         FROM profile_links \
         WHERE user_id = $1 AND platform = $2",
    )
    .bind(user_id)
    .bind(platform.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(RawLinkRow::into_link).transpose()
}

/// Creates or replaces the link for one platform.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_link(
    pool: &PgPool,
    user_id: i64,
    platform: Platform,
    url: &str,
) -> Result<ProfileLinkRow, DbError> {
    let row = sqlx::query_as::<_, RawLinkRow>(
        "INSERT INTO profile_links (user_id, platform, url) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (user_id, platform) DO UPDATE \
         SET url = EXCLUDED.url, updated_at = NOW() \
         RETURNING id, user_id, platform, url, updated_at",
    )
    .bind(user_id)
    .bind(platform.as_str())
    .bind(url)
    .fetch_one(pool)
    .await?;

    row.into_link()
}

/// Deletes the link for one platform; a cleared field has no row at all.
///
/// Returns `true` if a link existed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn clear_link(
    pool: &PgPool,
    user_id: i64,
    platform: Platform,
) -> Result<bool, DbError> {
    let result = sqlx::query(
        "DELETE FROM profile_links \
         WHERE user_id = $1 AND platform = $2",
    )
    .bind(user_id)
    .bind(platform.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
