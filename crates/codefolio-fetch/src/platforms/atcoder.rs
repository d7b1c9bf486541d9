//! AtCoder profile adapter.

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

/// Fetch the JSON rendering of an AtCoder user profile. Unknown users are a
/// plain 404.
pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Atcoder, &format!("users/{username}.json"))?;
    let payload = client.get_json(Platform::Atcoder, username, url).await?;

    if !payload.is_object() {
        return Err(FetchError::MalformedResponse {
            platform: Platform::Atcoder,
            reason: "expected a profile object".to_string(),
        });
    }
    Ok(payload)
}
