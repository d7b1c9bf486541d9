use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{load_user, map_db_error, parse_platform, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct LinkItem {
    platform: String,
    url: String,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PutLinkBody {
    url: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PutLinkResult {
    platform: String,
    /// `None` after a clear: an empty URL removes the link entirely.
    link: Option<LinkItem>,
}

pub(super) async fn list_links(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<LinkItem>>>, ApiError> {
    let user = load_user(&state, &req_id.0, user_id).await?;

    let links = codefolio_db::list_links(&state.pool, user.id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = links
        .into_iter()
        .map(|link| LinkItem {
            platform: link.platform.to_string(),
            url: link.url,
            updated_at: link.updated_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Set or clear the link for one platform.
///
/// A blank URL clears the link; the platform then has no link row at all,
/// and refreshes for it fall back without ever calling the upstream.
pub(super) async fn put_link(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((user_id, platform_tag)): Path<(Uuid, String)>,
    Json(body): Json<PutLinkBody>,
) -> Result<Json<ApiResponse<PutLinkResult>>, ApiError> {
    let user = load_user(&state, &req_id.0, user_id).await?;
    let platform = parse_platform(&req_id.0, &platform_tag)?;

    let url = body.url.trim();
    if url.is_empty() {
        codefolio_db::clear_link(&state.pool, user.id, platform)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
        return Ok(Json(ApiResponse {
            data: PutLinkResult {
                platform: platform.to_string(),
                link: None,
            },
            meta: ResponseMeta::new(req_id.0),
        }));
    }

    // Reject links the extractor can never use; the user gets the precise
    // reason back instead of a silent fallback at refresh time.
    if let Err(e) = codefolio_core::extract_username(platform, url) {
        return Err(ApiError::new(req_id.0, "validation_error", e.to_string()));
    }

    let link = codefolio_db::upsert_link(&state.pool, user.id, platform, url)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: PutLinkResult {
            platform: platform.to_string(),
            link: Some(LinkItem {
                platform: link.platform.to_string(),
                url: link.url,
                updated_at: link.updated_at,
            }),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
