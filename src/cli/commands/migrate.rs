use crate::config::Config;
use crate::db::Store;

pub async fn cmd_migrate(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let count = store.count_incidents().await?;
    println!("✓ Schema is up to date ({} incidents stored)", count);

    store.close().await
}
