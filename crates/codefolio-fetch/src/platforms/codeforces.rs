//! Codeforces `user.info` adapter.
//!
//! Codeforces wraps every response in a `{status, comment, result}` envelope
//! and reports user-level problems as `"status": "FAILED"` with a comment,
//! regardless of the HTTP status.

use codefolio_core::{Platform, RawPayload};
use serde_json::Value;

use crate::client::FetchClient;
use crate::error::FetchError;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let mut url = client.join(Platform::Codeforces, "api/user.info")?;
    url.query_pairs_mut().append_pair("handles", username);

    let body = client.get_json(Platform::Codeforces, username, url).await?;
    unwrap_envelope(&body, username)
}

/// Unwraps the API envelope, surfacing FAILED statuses as typed errors and
/// returning the first (only) entry of `result`.
fn unwrap_envelope(body: &Value, username: &str) -> Result<RawPayload, FetchError> {
    match body.get("status").and_then(Value::as_str) {
        Some("OK") => body
            .get("result")
            .and_then(|r| r.get(0))
            .cloned()
            .ok_or_else(|| FetchError::MalformedResponse {
                platform: Platform::Codeforces,
                reason: "OK status with empty result".to_string(),
            }),
        Some("FAILED") => {
            let comment = body
                .get("comment")
                .and_then(Value::as_str)
                .unwrap_or("no comment");
            if comment.contains("not found") {
                Err(FetchError::NotFound {
                    platform: Platform::Codeforces,
                    username: username.to_string(),
                })
            } else if comment.contains("limit") {
                Err(FetchError::RateLimited {
                    platform: Platform::Codeforces,
                })
            } else {
                Err(FetchError::MalformedResponse {
                    platform: Platform::Codeforces,
                    reason: format!("FAILED: {comment}"),
                })
            }
        }
        _ => Err(FetchError::MalformedResponse {
            platform: Platform::Codeforces,
            reason: "missing status field".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_unwraps_first_result() {
        let body = json!({
            "status": "OK",
            "result": [{"handle": "tourist", "rating": 3800}]
        });
        let payload = unwrap_envelope(&body, "tourist").unwrap();
        assert_eq!(payload["rating"], json!(3800));
    }

    #[test]
    fn failed_not_found_comment_maps_to_not_found() {
        let body = json!({
            "status": "FAILED",
            "comment": "handles: User with handle nobody not found"
        });
        let err = unwrap_envelope(&body, "nobody").unwrap_err();
        assert!(matches!(err, FetchError::NotFound { ref username, .. } if username == "nobody"));
    }

    #[test]
    fn failed_limit_comment_maps_to_rate_limited() {
        let body = json!({"status": "FAILED", "comment": "Call limit exceeded"});
        let err = unwrap_envelope(&body, "tourist").unwrap_err();
        assert!(matches!(err, FetchError::RateLimited { .. }));
    }

    #[test]
    fn missing_status_is_malformed() {
        let body = json!({"result": []});
        let err = unwrap_envelope(&body, "tourist").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn ok_with_empty_result_is_malformed() {
        let body = json!({"status": "OK", "result": []});
        let err = unwrap_envelope(&body, "tourist").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }
}
