//! LeetCode GraphQL adapter.
//!
//! LeetCode has no public REST profile endpoint; the public GraphQL endpoint
//! answers unauthenticated `matchedUser` queries. A missing user comes back
//! as HTTP 200 with `matchedUser: null`.

use codefolio_core::{Platform, RawPayload};
use serde_json::{json, Value};

use crate::client::FetchClient;
use crate::error::FetchError;

const USER_PROFILE_QUERY: &str = "\
query userPublicProfile($username: String!) {\
  matchedUser(username: $username) {\
    profile { ranking }\
    submitStats { acSubmissionNum { difficulty count } }\
  }\
}";

pub(crate) async fn fetch(
    client: &FetchClient,
    username: &str,
) -> Result<RawPayload, FetchError> {
    let url = client.join(Platform::Leetcode, "graphql")?;
    let body = json!({
        "query": USER_PROFILE_QUERY,
        "variables": { "username": username },
    });

    let response = client
        .post_json(Platform::Leetcode, username, url, &body)
        .await?;
    unwrap_data(&response, username)
}

/// Pulls the GraphQL `data` object out and treats a null `matchedUser` as a
/// missing profile.
fn unwrap_data(response: &Value, username: &str) -> Result<RawPayload, FetchError> {
    let data = response
        .get("data")
        .ok_or_else(|| FetchError::MalformedResponse {
            platform: Platform::Leetcode,
            reason: "missing data object".to_string(),
        })?;

    match data.get("matchedUser") {
        None | Some(Value::Null) => Err(FetchError::NotFound {
            platform: Platform::Leetcode,
            username: username.to_string(),
        }),
        Some(_) => Ok(data.clone()),
    }
}
