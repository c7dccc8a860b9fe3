//! `SeaORM` implementation of the `IncidentService` trait.

use crate::db::Store;
use crate::domain::IncidentId;
use crate::models::{Incident, NewIncident};
use crate::services::incident_service::{IncidentError, IncidentService};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SeaOrmIncidentService {
    store: Store,
    reject_unknown_on_update: bool,
}

impl SeaOrmIncidentService {
    #[must_use]
    pub const fn new(store: Store, reject_unknown_on_update: bool) -> Self {
        Self {
            store,
            reject_unknown_on_update,
        }
    }
}

#[async_trait]
impl IncidentService for SeaOrmIncidentService {
    async fn list_incidents(&self, status: &str) -> Result<Vec<Incident>, IncidentError> {
        Ok(self.store.list_incidents_by_status(status).await?)
    }

    async fn create_incident(&self, incident: NewIncident) -> Result<IncidentId, IncidentError> {
        info!(
            "New incident {} - {} - {}",
            incident.status, incident.incident_type, incident.message
        );

        let id = self.store.create_incident(&incident).await?;
        metrics::counter!("incidents_created_total", "level" => incident.level.as_str())
            .increment(1);

        Ok(id)
    }

    async fn update_incident(
        &self,
        id: IncidentId,
        incident: NewIncident,
    ) -> Result<u64, IncidentError> {
        info!(
            "Update incident {} - {} - {} - {}",
            id, incident.status, incident.incident_type, incident.message
        );

        let rows = self.store.update_incident(id, &incident).await?;

        if rows == 0 {
            if self.reject_unknown_on_update {
                return Err(IncidentError::NotFound(id));
            }
            warn!(incident_id = %id, "Update matched no incident");
        } else {
            metrics::counter!("incidents_updated_total", "status" => incident.status.as_str())
                .increment(1);
        }

        Ok(rows)
    }
}
