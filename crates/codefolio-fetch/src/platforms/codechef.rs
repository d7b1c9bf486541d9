//! CodeChef profile adapter.
//!
//! Uses the community JSON mirror of CodeChef profile pages, which returns a
//! flat body with a `success` flag rather than HTTP error statuses.

use codefolio_core::{Platform, RawPayload};
use serde_json::Value;

use crate::client::FetchClient;
use crate::error::FetchError;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Codechef, &format!("handle/{username}"))?;
    let body = client.get_json(Platform::Codechef, username, url).await?;

    match body.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(body),
        Some(false) => Err(FetchError::NotFound {
            platform: Platform::Codechef,
            username: username.to_string(),
        }),
        None => Err(FetchError::MalformedResponse {
            platform: Platform::Codechef,
            reason: "missing success flag".to_string(),
        }),
    }
}
