//! Shared helpers for CLI commands: config, pool, and user resolution.

use std::str::FromStr;

use uuid::Uuid;

use codefolio_core::{AppConfig, Platform};

pub(crate) async fn load_config_and_pool() -> anyhow::Result<(AppConfig, sqlx::PgPool)> {
    let config = codefolio_core::load_app_config()?;
    let pool_config = codefolio_db::PoolConfig::from_app_config(&config);
    let pool = codefolio_db::connect_pool(&config.database_url, pool_config).await?;
    Ok((config, pool))
}

/// Resolve `--user` input as a public UUID first, then as a handle.
pub(crate) async fn resolve_user(
    pool: &sqlx::PgPool,
    reference: &str,
) -> anyhow::Result<codefolio_db::UserRow> {
    let user = if let Ok(public_id) = Uuid::parse_str(reference) {
        codefolio_db::get_user_by_public_id(pool, public_id).await?
    } else {
        codefolio_db::get_user_by_handle(pool, reference).await?
    };

    user.ok_or_else(|| anyhow::anyhow!("user '{reference}' not found"))
}

pub(crate) fn parse_platform(tag: &str) -> anyhow::Result<Platform> {
    Platform::from_str(tag).map_err(|e| {
        anyhow::anyhow!(
            "{e}; expected one of: {}",
            Platform::ALL
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_platform_accepts_every_tag() {
        for platform in Platform::ALL {
            assert_eq!(parse_platform(platform.as_str()).unwrap(), platform);
        }
    }

    #[test]
    fn parse_platform_error_lists_alternatives() {
        let err = parse_platform("orkut").unwrap_err();
        assert!(err.to_string().contains("github"));
    }
}
