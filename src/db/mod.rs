use crate::domain::IncidentId;
use crate::models::{Incident, NewIncident};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Owns the connection pool and exposes the incident queries.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let in_memory = db_url.contains(":memory:");

        if db_url.starts_with("sqlite:") && !in_memory {
            let path_str = db_url
                .trim_start_matches("sqlite:")
                .trim_start_matches("//")
                .split('?')
                .next()
                .unwrap_or_default();
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection would otherwise get its own private in-memory database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;
        let store = Self { conn };
        store.ensure_schema().await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(store)
    }

    /// Creates the incidents table if it is missing. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> Result<()> {
        migrator::Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    /// Releases the pool. Called once on shutdown.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        info!("Database connection pool closed");
        Ok(())
    }

    fn incident_repo(&self) -> repositories::incident::IncidentRepository {
        repositories::incident::IncidentRepository::new(self.conn.clone())
    }

    pub async fn list_incidents_by_status(&self, status: &str) -> Result<Vec<Incident>> {
        self.incident_repo().list_by_status(status).await
    }

    pub async fn create_incident(&self, incident: &NewIncident) -> Result<IncidentId> {
        self.incident_repo().insert(incident).await
    }

    pub async fn update_incident(&self, id: IncidentId, incident: &NewIncident) -> Result<u64> {
        self.incident_repo().update(id, incident).await
    }

    pub async fn count_incidents(&self) -> Result<u64> {
        self.incident_repo().count().await
    }
}
