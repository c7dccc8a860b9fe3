//! List incidents command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_incidents(config: &Config, status: &str) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let incidents = store.list_incidents_by_status(status).await?;

    if incidents.is_empty() {
        println!("No {} incidents.", status);
        store.close().await?;
        return Ok(());
    }

    println!("Incidents with status '{}' ({} total)", status, incidents.len());
    println!("{:-<70}", "");

    for incident in incidents {
        let level = incident.level.as_deref().unwrap_or("?");
        let indicator = match level {
            "critical" => "🔴",
            "warning" => "🟠",
            "info" => "🔵",
            _ => "•",
        };

        println!(
            "{} #{} [{}] {}",
            indicator,
            incident.id,
            level,
            incident.message.as_deref().unwrap_or("")
        );
        println!(
            "  Type: {} | Created: {} | Updated: {}",
            incident.incident_type.as_deref().unwrap_or("?"),
            incident.created_at.to_rfc3339(),
            incident.updated_at.to_rfc3339()
        );
    }

    store.close().await?;
    Ok(())
}
