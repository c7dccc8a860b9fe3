use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::validation::ValidationError;
use crate::services::IncidentError;

/// Body returned for every rejected or failed write.
pub const INVALID_PARAMETERS: &str = "Invalid parameters";

pub const INCIDENT_NOT_FOUND: &str = "Incident not found.";

#[derive(Debug)]
pub enum ApiError {
    /// The request never reached the database.
    InvalidParameters(ValidationError),

    /// The database refused or failed the statement.
    DatabaseError(String),

    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidParameters(err) => write!(f, "Invalid parameters: {}", err),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation and persistence failures look the same to the client.
        let (status, body) = match &self {
            ApiError::InvalidParameters(err) => {
                tracing::info!("Invalid incident params - {}", err);
                metrics::counter!("incident_validation_failures_total").increment(1);
                (StatusCode::BAD_REQUEST, INVALID_PARAMETERS)
            }
            ApiError::DatabaseError(msg) => {
                tracing::warn!("Database error: {}", msg);
                (StatusCode::BAD_REQUEST, INVALID_PARAMETERS)
            }
            ApiError::NotFound(msg) => {
                tracing::info!("{}", msg);
                (StatusCode::NOT_FOUND, INCIDENT_NOT_FOUND)
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidParameters(err)
    }
}

impl From<IncidentError> for ApiError {
    fn from(err: IncidentError) -> Self {
        match err {
            IncidentError::NotFound(id) => ApiError::NotFound(format!("Incident {} not found", id)),
            IncidentError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IncidentId;

    #[test]
    fn test_validation_and_database_errors_share_status() {
        let validation = ApiError::from(ValidationError::MissingField("status")).into_response();
        let database =
            ApiError::from(IncidentError::Database("CHECK constraint failed".into())).into_response();

        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(database.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(IncidentError::NotFound(IncidentId::new(9))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
