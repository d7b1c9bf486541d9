//! Concurrent fan-out/fan-in over the requested platform set.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use futures::stream::{self, StreamExt};

use codefolio_core::{extract_username, Platform};
use codefolio_fetch::FetchClient;
use codefolio_stats::{default_summary, summarize};

use crate::outcome::{FallbackReason, FetchOutcome};

/// Upper bound on concurrently in-flight platform fetches; the requested set
/// is itself capped at the ten supported platforms.
pub const MAX_CONCURRENT_FETCHES: usize = 10;

/// Platforms eligible for an "all"-mode refresh: exactly those the user has
/// a link configured for. Unlinked platforms never enter the fan-out.
#[must_use]
pub fn configured_platforms(links: &HashMap<Platform, String>) -> BTreeSet<Platform> {
    links.keys().copied().collect()
}

/// Refresh every requested platform concurrently.
///
/// Each platform runs link resolution → extraction → fetch → normalization
/// in its own task; a failure at any step degrades that platform's outcome
/// to [`FetchOutcome::Fallback`] and never disturbs its siblings. The
/// returned map's key set always equals `requested`: the call resolves only
/// once every platform has produced an outcome, and result ordering carries
/// no meaning beyond the key.
pub async fn refresh_platforms(
    client: &FetchClient,
    links: &HashMap<Platform, String>,
    requested: &BTreeSet<Platform>,
) -> BTreeMap<Platform, FetchOutcome> {
    stream::iter(requested.iter().copied())
        .map(|platform| async move {
            let link = links.get(&platform).map(String::as_str);
            (platform, refresh_one(client, platform, link).await)
        })
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect::<BTreeMap<_, _>>()
        .await
}

/// Run one platform's refresh chain, containing every failure.
async fn refresh_one(
    client: &FetchClient,
    platform: Platform,
    link: Option<&str>,
) -> FetchOutcome {
    let Some(raw_url) = link else {
        tracing::debug!(platform = %platform, "no link configured, skipping fetch");
        return fallback(platform, FallbackReason::NoLinkConfigured);
    };

    let username = match extract_username(platform, raw_url) {
        Ok(username) => username,
        Err(e) => {
            tracing::warn!(platform = %platform, error = %e, "username extraction failed");
            return fallback(platform, FallbackReason::ExtractionFailed(e));
        }
    };

    match client.fetch(platform, &username).await {
        Ok(raw) => {
            let summary = summarize(platform, &raw);
            tracing::debug!(platform = %platform, username, "platform refresh succeeded");
            FetchOutcome::Success { summary, raw }
        }
        Err(e) => {
            tracing::warn!(platform = %platform, username, error = %e, "platform fetch failed");
            fallback(platform, FallbackReason::UpstreamFailed(e.kind()))
        }
    }
}

fn fallback(platform: Platform, reason: FallbackReason) -> FetchOutcome {
    FetchOutcome::Fallback {
        summary: default_summary(platform),
        reason,
    }
}
