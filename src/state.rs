use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{IncidentService, SeaOrmIncidentService};

/// Everything built once at startup and shared, read-only, by all requests.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub incident_service: Arc<dyn IncidentService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let incident_service: Arc<dyn IncidentService> = Arc::new(SeaOrmIncidentService::new(
            store.clone(),
            config.incidents.reject_unknown_on_update,
        ));

        Self {
            config: Arc::new(config),
            store,
            incident_service,
        }
    }
}
