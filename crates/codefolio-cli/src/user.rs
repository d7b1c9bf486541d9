//! `create-user` command handler.

use crate::common::load_config_and_pool;

pub(crate) async fn create(handle: &str, display_name: Option<&str>) -> anyhow::Result<()> {
    let (_config, pool) = load_config_and_pool().await?;

    let user = codefolio_db::create_user(&pool, handle, display_name).await?;
    println!("created user '{}' ({})", user.handle, user.public_id);
    Ok(())
}
