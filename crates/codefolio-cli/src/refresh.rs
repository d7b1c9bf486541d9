//! `refresh` command handler: fetch, normalize, and commit platform stats.

use std::collections::BTreeSet;

use codefolio_core::Platform;
use codefolio_fetch::FetchClient;
use codefolio_refresh::{configured_platforms, refresh_platforms, FetchOutcome};

use crate::common::{load_config_and_pool, parse_platform, resolve_user};

pub(crate) async fn run(user_ref: &str, platform_tag: Option<&str>) -> anyhow::Result<()> {
    let (config, pool) = load_config_and_pool().await?;
    let user = resolve_user(&pool, user_ref).await?;
    let client = FetchClient::from_app_config(&config)?;

    let links = codefolio_db::link_map(&pool, user.id).await?;
    let requested: BTreeSet<Platform> = match platform_tag {
        Some(tag) => BTreeSet::from([parse_platform(tag)?]),
        None => configured_platforms(&links),
    };

    if requested.is_empty() {
        println!("'{}' has no links configured; nothing to refresh", user.handle);
        return Ok(());
    }

    let outcomes = refresh_platforms(&client, &links, &requested).await;
    let commit = codefolio_db::commit_outcomes(&pool, user.id, &links, &outcomes).await?;

    for (platform, outcome) in &outcomes {
        match outcome {
            FetchOutcome::Success { .. } => println!("{platform:<12} refreshed"),
            FetchOutcome::Fallback { reason, .. } => {
                println!("{platform:<12} skipped ({reason})");
            }
        }
    }
    println!(
        "committed {} of {} platform(s)",
        commit.committed.len(),
        outcomes.len()
    );

    Ok(())
}
