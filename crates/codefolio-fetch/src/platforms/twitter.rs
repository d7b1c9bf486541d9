//! Twitter/X v2 user adapter.
//!
//! The v2 API reports missing users as HTTP 200 with an `errors` array and
//! no `data` object; public metrics ride along via `user.fields`.

use codefolio_core::{Platform, RawPayload};
use serde_json::Value;

use crate::client::FetchClient;
use crate::error::FetchError;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let mut url = client.join(
        Platform::Twitter,
        &format!("2/users/by/username/{username}"),
    )?;
    url.query_pairs_mut()
        .append_pair("user.fields", "public_metrics");

    let body = client.get_json(Platform::Twitter, username, url).await?;
    unwrap_body(&body, username)
}

fn unwrap_body(body: &Value, username: &str) -> Result<RawPayload, FetchError> {
    if body.get("data").is_some() {
        return Ok(body.clone());
    }
    if body.get("errors").is_some() {
        return Err(FetchError::NotFound {
            platform: Platform::Twitter,
            username: username.to_string(),
        });
    }
    Err(FetchError::MalformedResponse {
        platform: Platform::Twitter,
        reason: "missing both data and errors".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn errors_array_maps_to_not_found() {
        let body = json!({"errors": [{"title": "Not Found Error"}]});
        let err = unwrap_body(&body, "ghost").unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[test]
    fn data_object_passes_through() {
        let body = json!({
            "data": {
                "username": "alice",
                "public_metrics": {"followers_count": 9}
            }
        });
        let payload = unwrap_body(&body, "alice").unwrap();
        assert_eq!(payload["data"]["public_metrics"]["followers_count"], json!(9));
    }

    #[test]
    fn empty_body_is_malformed() {
        let err = unwrap_body(&json!({}), "alice").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }
}
