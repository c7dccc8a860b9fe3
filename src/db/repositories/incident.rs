use crate::domain::IncidentId;
use crate::entities::{incidents, prelude::*};
use crate::models::{Incident, NewIncident};
use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// Repository for incident rows
pub struct IncidentRepository {
    conn: DatabaseConnection,
}

impl IncidentRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: incidents::Model) -> Incident {
        Incident {
            id: IncidentId::new(m.id),
            status: m.status,
            incident_type: m.incident_type,
            level: m.level,
            message: m.message,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    /// Rows whose status equals `status` exactly, in insertion order.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Incident>> {
        let rows = Incidents::find()
            .filter(incidents::Column::Status.eq(status))
            .order_by_asc(incidents::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn insert(&self, incident: &NewIncident) -> Result<IncidentId> {
        let now = Utc::now().fixed_offset();

        let active_model = incidents::ActiveModel {
            status: Set(incident.status.as_str().to_string()),
            incident_type: Set(Some(incident.incident_type.as_str().to_string())),
            level: Set(Some(incident.level.as_str().to_string())),
            message: Set(Some(incident.message.clone())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let res = Incidents::insert(active_model).exec(&self.conn).await?;
        Ok(IncidentId::new(res.last_insert_id))
    }

    /// Rewrites every mutable column of `id`. Returns the number of rows touched,
    /// which is zero when no such incident exists.
    pub async fn update(&self, id: IncidentId, incident: &NewIncident) -> Result<u64> {
        let now = Utc::now().fixed_offset();

        let result = Incidents::update_many()
            .col_expr(
                incidents::Column::Status,
                Expr::value(incident.status.as_str()),
            )
            .col_expr(
                incidents::Column::IncidentType,
                Expr::value(incident.incident_type.as_str()),
            )
            .col_expr(incidents::Column::Level, Expr::value(incident.level.as_str()))
            .col_expr(
                incidents::Column::Message,
                Expr::value(incident.message.as_str()),
            )
            .col_expr(incidents::Column::UpdatedAt, Expr::value(now))
            .filter(incidents::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Incidents::find().count(&self.conn).await?)
    }
}
