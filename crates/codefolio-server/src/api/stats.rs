use std::collections::{BTreeMap, BTreeSet};

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use codefolio_core::{Platform, PlatformKind};
use codefolio_refresh::{configured_platforms, refresh_platforms, FetchOutcome};

use crate::middleware::RequestId;

use super::{load_user, map_db_error, parse_platform, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StatsItem {
    summary: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_payload: Option<serde_json::Value>,
    source_url: String,
    last_refreshed_at: DateTime<Utc>,
}

/// Cached stats grouped the way the profile page renders them: one map per
/// platform kind, keyed by tag. Platforms that never refreshed successfully
/// are absent, which readers must not confuse with zeroed stats.
#[derive(Debug, Serialize)]
pub(super) struct UserStats {
    competitive: BTreeMap<String, StatsItem>,
    social: BTreeMap<String, StatsItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatsQuery {
    /// Include the cached raw payloads (detail views only; they are large).
    #[serde(default)]
    include_raw: bool,
}

pub(super) async fn get_user_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ApiResponse<UserStats>>, ApiError> {
    let user = load_user(&state, &req_id.0, user_id).await?;

    let records = codefolio_db::list_stats(&state.pool, user.id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let mut data = UserStats {
        competitive: BTreeMap::new(),
        social: BTreeMap::new(),
    };
    for record in records {
        let item = StatsItem {
            summary: record.summary,
            raw_payload: if query.include_raw {
                record.raw_payload
            } else {
                None
            },
            source_url: record.source_url,
            last_refreshed_at: record.last_refreshed_at,
        };
        let group = match record.platform.kind() {
            PlatformKind::Competitive => &mut data.competitive,
            PlatformKind::Social => &mut data.social,
        };
        group.insert(record.platform.to_string(), item);
    }

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum RefreshMode {
    Single,
    All,
}

#[derive(Debug, Deserialize)]
pub(super) struct RefreshRequest {
    mode: RefreshMode,
    platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct OutcomeItem {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshResult {
    outcomes: BTreeMap<String, OutcomeItem>,
    committed: usize,
}

/// Run an on-demand refresh for one platform or for every linked platform.
///
/// Per-platform failures degrade that platform's outcome only; a failure to
/// persist the successful outcomes fails the whole request, since partial
/// commits are not allowed.
pub(super) async fn refresh_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResult>>, ApiError> {
    let user = load_user(&state, &req_id.0, user_id).await?;

    let links = codefolio_db::link_map(&state.pool, user.id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let requested: BTreeSet<Platform> = match body.mode {
        RefreshMode::Single => {
            let Some(tag) = body.platform.as_deref() else {
                return Err(ApiError::new(
                    req_id.0,
                    "validation_error",
                    "mode \"single\" requires a platform tag",
                ));
            };
            BTreeSet::from([parse_platform(&req_id.0, tag)?])
        }
        RefreshMode::All => configured_platforms(&links),
    };

    let outcomes = refresh_platforms(&state.fetch, &links, &requested).await;

    let commit = codefolio_db::commit_outcomes(&state.pool, user.id, &links, &outcomes)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::info!(
        user = %user.public_id,
        requested = requested.len(),
        committed = commit.committed.len(),
        "profile stats refresh finished"
    );

    let outcomes = outcomes
        .iter()
        .map(|(platform, outcome)| {
            let item = match outcome {
                FetchOutcome::Success { .. } => OutcomeItem {
                    status: "refreshed",
                    reason: None,
                },
                FetchOutcome::Fallback { reason, .. } => OutcomeItem {
                    status: "skipped",
                    reason: Some(reason.code()),
                },
            };
            (platform.to_string(), item)
        })
        .collect();

    Ok(Json(ApiResponse {
        data: RefreshResult {
            outcomes,
            committed: commit.committed.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_parses_single_mode() {
        let body: RefreshRequest =
            serde_json::from_str(r#"{"mode": "single", "platform": "github"}"#).unwrap();
        assert!(matches!(body.mode, RefreshMode::Single));
        assert_eq!(body.platform.as_deref(), Some("github"));
    }

    #[test]
    fn refresh_request_parses_all_mode_without_platform() {
        let body: RefreshRequest = serde_json::from_str(r#"{"mode": "all"}"#).unwrap();
        assert!(matches!(body.mode, RefreshMode::All));
        assert!(body.platform.is_none());
    }

    #[test]
    fn outcome_item_skips_null_reason() {
        let item = OutcomeItem {
            status: "refreshed",
            reason: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"status":"refreshed"}"#);
    }
}
