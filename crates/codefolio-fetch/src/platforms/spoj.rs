//! SPOJ profile adapter.

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

/// Fetch the JSON rendering of a SPOJ user profile. A user who has solved
/// nothing still yields a complete payload with zero counts.
pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Spoj, &format!("users/{username}.json"))?;
    let payload = client.get_json(Platform::Spoj, username, url).await?;

    if !payload.is_object() {
        return Err(FetchError::MalformedResponse {
            platform: Platform::Spoj,
            reason: "expected a profile object".to_string(),
        });
    }
    Ok(payload)
}
