//! GitHub REST user adapter.

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

/// Fetch the public user object from the GitHub REST API.
///
/// A user with zero repositories or followers is a complete, valid payload.
pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Github, &format!("users/{username}"))?;
    let payload = client.get_json(Platform::Github, username, url).await?;

    if !payload.is_object() {
        return Err(FetchError::MalformedResponse {
            platform: Platform::Github,
            reason: "expected a user object".to_string(),
        });
    }
    Ok(payload)
}
