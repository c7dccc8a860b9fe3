pub mod incident;

pub use incident::{Incident, IncidentLevel, IncidentStatus, IncidentType, NewIncident};
