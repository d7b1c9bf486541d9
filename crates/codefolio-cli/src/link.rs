//! `link` subcommands: set, clear, and list profile links.

use clap::Subcommand;

use crate::common::{load_config_and_pool, parse_platform, resolve_user};

#[derive(Debug, Subcommand)]
pub(crate) enum LinkCommand {
    /// Set (or replace) the link for one platform.
    Set {
        /// User handle or public UUID.
        #[arg(long)]
        user: String,
        #[arg(long)]
        platform: String,
        #[arg(long)]
        url: String,
    },
    /// Remove the link for one platform.
    Clear {
        /// User handle or public UUID.
        #[arg(long)]
        user: String,
        #[arg(long)]
        platform: String,
    },
    /// List all configured links.
    List {
        /// User handle or public UUID.
        #[arg(long)]
        user: String,
    },
}

pub(crate) async fn run(command: LinkCommand) -> anyhow::Result<()> {
    let (_config, pool) = load_config_and_pool().await?;

    match command {
        LinkCommand::Set {
            user,
            platform,
            url,
        } => {
            let user = resolve_user(&pool, &user).await?;
            let platform = parse_platform(&platform)?;

            // Surface unusable links now rather than as a refresh fallback.
            let username = codefolio_core::extract_username(platform, &url)
                .map_err(|e| anyhow::anyhow!("unusable link: {e}"))?;

            let link = codefolio_db::upsert_link(&pool, user.id, platform, url.trim()).await?;
            println!(
                "linked {} -> {} (username '{username}')",
                link.platform, link.url
            );
        }
        LinkCommand::Clear { user, platform } => {
            let user = resolve_user(&pool, &user).await?;
            let platform = parse_platform(&platform)?;

            let removed = codefolio_db::clear_link(&pool, user.id, platform).await?;
            if removed {
                println!("cleared {platform} link");
            } else {
                println!("no {platform} link was configured");
            }
        }
        LinkCommand::List { user } => {
            let user = resolve_user(&pool, &user).await?;

            let links = codefolio_db::list_links(&pool, user.id).await?;
            if links.is_empty() {
                println!("no links configured for '{}'", user.handle);
            }
            for link in links {
                println!("{:<12} {}", link.platform.to_string(), link.url);
            }
        }
    }

    Ok(())
}
