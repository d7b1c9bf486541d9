//! `show` command handler: print a user's cached platform stats.

use codefolio_core::PlatformKind;

use crate::common::{load_config_and_pool, resolve_user};

pub(crate) async fn run(user_ref: &str, include_raw: bool) -> anyhow::Result<()> {
    let (_config, pool) = load_config_and_pool().await?;
    let user = resolve_user(&pool, user_ref).await?;

    let records = codefolio_db::list_stats(&pool, user.id).await?;
    if records.is_empty() {
        println!("no cached stats for '{}'", user.handle);
        return Ok(());
    }

    for kind in [PlatformKind::Competitive, PlatformKind::Social] {
        let group: Vec<_> = records
            .iter()
            .filter(|r| r.platform.kind() == kind)
            .collect();
        if group.is_empty() {
            continue;
        }

        match kind {
            PlatformKind::Competitive => println!("competitive:"),
            PlatformKind::Social => println!("social:"),
        }
        for record in group {
            println!(
                "  {:<12} refreshed {}  ({})",
                record.platform.to_string(),
                record.last_refreshed_at.format("%Y-%m-%d %H:%M:%S"),
                record.source_url
            );
            println!("    {}", serde_json::to_string(&record.summary)?);
            if include_raw {
                if let Some(raw) = &record.raw_payload {
                    println!("    raw: {}", serde_json::to_string(raw)?);
                }
            }
        }
    }

    Ok(())
}
