//! Domain service for incident records.
//!
//! Handlers receive already-validated [`NewIncident`] values; this layer only
//! deals with persistence outcomes.

use crate::domain::IncidentId;
use crate::models::{Incident, NewIncident};
use thiserror::Error;

/// Persistence-side failures of incident operations.
#[derive(Debug, Error)]
pub enum IncidentError {
    #[error("Incident not found: {0}")]
    NotFound(IncidentId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for IncidentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for incidents.
///
/// # Examples
///
/// ```rust,ignore
/// use incident_admin::services::{IncidentError, IncidentService};
/// use std::sync::Arc;
///
/// async fn active(service: Arc<dyn IncidentService>) -> Result<usize, IncidentError> {
///     Ok(service.list_incidents("active").await?.len())
/// }
/// ```
#[async_trait::async_trait]
pub trait IncidentService: Send + Sync {
    /// Lists incidents whose status equals `status`. Unknown statuses yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentError::Database`] on query failures.
    async fn list_incidents(&self, status: &str) -> Result<Vec<Incident>, IncidentError>;

    /// Inserts a new incident stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentError::Database`] when the insert fails, including
    /// CHECK constraint violations.
    async fn create_incident(&self, incident: NewIncident) -> Result<IncidentId, IncidentError>;

    /// Rewrites all mutable fields of an incident and refreshes `updated_at`.
    ///
    /// Returns the number of rows affected. An unknown id affects zero rows and
    /// succeeds unless the service was built in strict mode.
    ///
    /// # Errors
    ///
    /// - Returns [`IncidentError::NotFound`] in strict mode when nothing matched
    /// - Returns [`IncidentError::Database`] when the update fails
    async fn update_incident(
        &self,
        id: IncidentId,
        incident: NewIncident,
    ) -> Result<u64, IncidentError>;
}
