pub mod incident_service;
pub use incident_service::{IncidentError, IncidentService};

pub mod incident_service_impl;
pub use incident_service_impl::SeaOrmIncidentService;
