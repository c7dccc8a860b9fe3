use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Incident;

/// Incident row as returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct IncidentDto {
    pub id: i32,
    pub status: String,
    pub incident_type: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Incident> for IncidentDto {
    fn from(incident: Incident) -> Self {
        Self {
            id: incident.id.value(),
            status: incident.status,
            incident_type: incident.incident_type,
            level: incident.level,
            message: incident.message,
            created_at: incident.created_at.to_rfc3339(),
            updated_at: incident.updated_at.to_rfc3339(),
        }
    }
}

/// Body of the create and update endpoints, split out of the JSON object by
/// [`super::validation::parse_incident_body`].
///
/// Fields are kept as raw JSON so that a wrong type is reported per field by
/// [`super::validation::validate_incident_payload`] instead of as a parse error.
/// A key given as `null` is `Some(Value::Null)`, a missing key is `None`.
#[derive(Debug, Default)]
pub struct IncidentPayload {
    pub incident_type: Option<Value>,
    pub status: Option<Value>,
    pub level: Option<Value>,
    pub message: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ListIncidentsQuery {
    pub status: Option<String>,
}
