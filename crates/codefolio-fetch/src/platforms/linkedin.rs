//! LinkedIn profile adapter.
//!
//! Follower and connection counts come from the profile-statistics endpoint,
//! nested under a `profile` object.

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Linkedin, &format!("profiles/{username}"))?;
    let payload = client.get_json(Platform::Linkedin, username, url).await?;

    if payload.get("profile").is_none() {
        return Err(FetchError::MalformedResponse {
            platform: Platform::Linkedin,
            reason: "missing profile object".to_string(),
        });
    }
    Ok(payload)
}
