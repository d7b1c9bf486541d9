//! One fetch adapter per platform.
//!
//! Each adapter is fully independent: it owns its endpoint path, envelope
//! handling, and failure mapping, and knows nothing about its siblings.

mod atcoder;
mod codechef;
mod codeforces;
mod facebook;
mod github;
mod instagram;
mod leetcode;
mod linkedin;
mod spoj;
mod twitter;

use codefolio_core::{Platform, RawPayload};

use crate::client::FetchClient;
use crate::error::FetchError;

/// Route a fetch to the platform's adapter. Exhaustive over the enum, so a
/// new platform fails to compile until it has an adapter.
pub(crate) async fn dispatch(
    client: &FetchClient,
    platform: Platform,
    username: &str,
) -> Result<RawPayload, FetchError> {
    match platform {
        Platform::Leetcode => leetcode::fetch(client, username).await,
        Platform::Codeforces => codeforces::fetch(client, username).await,
        Platform::Codechef => codechef::fetch(client, username).await,
        Platform::Atcoder => atcoder::fetch(client, username).await,
        Platform::Spoj => spoj::fetch(client, username).await,
        Platform::Github => github::fetch(client, username).await,
        Platform::Linkedin => linkedin::fetch(client, username).await,
        Platform::Twitter => twitter::fetch(client, username).await,
        Platform::Facebook => facebook::fetch(client, username).await,
        Platform::Instagram => instagram::fetch(client, username).await,
    }
}
