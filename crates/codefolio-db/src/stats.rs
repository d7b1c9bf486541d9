//! Database operations for the `platform_stats` table, including the
//! refresh commit.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use codefolio_core::Platform;
use codefolio_refresh::FetchOutcome;
use sqlx::PgPool;

use crate::DbError;

/// A cached statistics record for one platform of one user.
///
/// Exists only for platforms that have refreshed successfully at least once;
/// a platform that has never succeeded has no row, which readers must treat
/// as distinct from a row full of zeros.
#[derive(Debug, Clone)]
pub struct StatsRecordRow {
    pub id: i64,
    pub user_id: i64,
    pub platform: Platform,
    pub summary: serde_json::Value,
    pub raw_payload: Option<serde_json::Value>,
    pub source_url: String,
    pub last_refreshed_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct RawStatsRow {
    id: i64,
    user_id: i64,
    platform: String,
    summary: serde_json::Value,
    raw_payload: Option<serde_json::Value>,
    source_url: String,
    last_refreshed_at: DateTime<Utc>,
}

impl RawStatsRow {
    fn into_record(self) -> Result<StatsRecordRow, DbError> {
        let platform = Platform::from_str(&self.platform)
            .map_err(|_| DbError::UnknownPlatform(self.platform.clone()))?;
        Ok(StatsRecordRow {
            id: self.id,
            user_id: self.user_id,
            platform,
            summary: self.summary,
            raw_payload: self.raw_payload,
            source_url: self.source_url,
            last_refreshed_at: self.last_refreshed_at,
        })
    }
}

/// What a refresh commit actually wrote.
#[derive(Debug, Clone, Default)]
pub struct CommitSummary {
    /// Platforms whose records were overwritten this commit.
    pub committed: Vec<Platform>,
    /// Platforms left untouched because their outcome was a fallback.
    pub skipped: Vec<Platform>,
}

/// Returns all cached stats records for a user, ordered by platform tag.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::UnknownPlatform`] if a stored tag no longer parses.
pub async fn list_stats(pool: &PgPool, user_id: i64) -> Result<Vec<StatsRecordRow>, DbError> {
    let rows = sqlx::query_as::<_, RawStatsRow>(
        "SELECT id, user_id, platform, summary, raw_payload, source_url, last_refreshed_at \
         FROM platform_stats \
         WHERE user_id = $1 \
         ORDER BY platform",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(RawStatsRow::into_record).collect()
}

/// Returns one platform's cached record, or `None` if it has never
/// refreshed successfully.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::UnknownPlatform`] if the stored tag no longer parses.
pub async fn get_stats(
    pool: &PgPool,
    user_id: i64,
    platform: Platform,
) -> Result<Option<StatsRecordRow>, DbError> {
    let row = sqlx::query_as::<_, RawStatsRow>(
        "SELECT id, user_id, platform, summary, raw_payload, source_url, last_refreshed_at \
         FROM platform_stats \
         WHERE user_id = $1 AND platform = $2",
    )
    .bind(user_id)
    .bind(platform.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(RawStatsRow::into_record).transpose()
}

/// Commits the successful outcomes of one refresh run.
///
/// Upserts one record per `Success` outcome (summary, raw payload, the
/// link the fetch used, and a fresh `last_refreshed_at`) inside a single
/// transaction. `Fallback` outcomes write nothing: a pre-existing record
/// stays exactly as it was, and a platform that never succeeded still has
/// no row. A persistence failure rolls the whole commit back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement or the final commit fails.
pub async fn commit_outcomes(
    pool: &PgPool,
    user_id: i64,
    links: &HashMap<Platform, String>,
    outcomes: &BTreeMap<Platform, FetchOutcome>,
) -> Result<CommitSummary, DbError> {
    let mut tx = pool.begin().await?;
    let mut result = CommitSummary::default();

    for (platform, outcome) in outcomes {
        match outcome {
            FetchOutcome::Success { summary, raw } => {
                let source_url = links.get(platform).map(String::as_str).unwrap_or_default();
                sqlx::query(
                    "INSERT INTO platform_stats \
                         (user_id, platform, summary, raw_payload, source_url, last_refreshed_at) \
                     VALUES ($1, $2, $3, $4, $5, NOW()) \
                     ON CONFLICT (user_id, platform) DO UPDATE \
                     SET summary = EXCLUDED.summary, \
                         raw_payload = EXCLUDED.raw_payload, \
                         source_url = EXCLUDED.source_url, \
                         last_refreshed_at = EXCLUDED.last_refreshed_at",
                )
                .bind(user_id)
                .bind(platform.as_str())
                .bind(serde_json::Value::Object(summary.clone()))
                .bind(raw)
                .bind(source_url)
                .execute(&mut *tx)
                .await?;
                result.committed.push(*platform);
            }
            FetchOutcome::Fallback { .. } => result.skipped.push(*platform),
        }
    }

    tx.commit().await?;
    Ok(result)
}
