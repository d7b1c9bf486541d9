//! Instagram web-profile adapter.
//!
//! The web profile endpoint serves the `graphql.user` tree that the public
//! profile page renders from. Logged-out throttling surfaces as an empty
//! body rather than an HTTP error.

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let mut url = client.join(Platform::Instagram, &format!("{username}/"))?;
    url.query_pairs_mut().append_pair("__a", "1");

    let body = client.get_json(Platform::Instagram, username, url).await?;

    if body
        .get("graphql")
        .and_then(|g| g.get("user"))
        .is_none()
    {
        return Err(FetchError::MalformedResponse {
            platform: Platform::Instagram,
            reason: "missing graphql.user tree".to_string(),
        });
    }
    Ok(body)
}
