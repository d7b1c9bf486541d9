//! Facebook Graph adapter.
//!
//! Graph reports problems as an `error` object in the body; error code 4 is
//! the application-level rate limit, everything else on a page lookup means
//! the page is gone or inaccessible.

use codefolio_core::{Platform, RawPayload};
use serde_json::Value;

use crate::client::FetchClient;
use crate::error::FetchError;

const GRAPH_RATE_LIMIT_CODE: i64 = 4;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let mut url = client.join(Platform::Facebook, username)?;
    url.query_pairs_mut()
        .append_pair("fields", "followers_count,fan_count");

    let body = client.get_json(Platform::Facebook, username, url).await?;

    if let Some(error) = body.get("error") {
        let code = error.get("code").and_then(Value::as_i64);
        if code == Some(GRAPH_RATE_LIMIT_CODE) {
            return Err(FetchError::RateLimited {
                platform: Platform::Facebook,
            });
        }
        return Err(FetchError::NotFound {
            platform: Platform::Facebook,
            username: username.to_string(),
        });
    }
    Ok(body)
}
