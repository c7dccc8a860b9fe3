use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use serde_json::Value;

use super::validation::{
    ValidationError, parse_incident_body, parse_incident_id, validate_incident_payload,
};
use super::{ApiError, AppState, IncidentDto, ListIncidentsQuery};

pub const DEFAULT_STATUS_FILTER: &str = "active";

pub async fn list_incidents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListIncidentsQuery>,
) -> Result<Json<Vec<IncidentDto>>, ApiError> {
    let status = query.status.as_deref().unwrap_or(DEFAULT_STATUS_FILTER);
    let incidents = state.incident_service().list_incidents(status).await?;
    Ok(Json(incidents.into_iter().map(IncidentDto::from).collect()))
}

pub async fn create_incident(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(body) = body.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let incident = validate_incident_payload(parse_incident_body(body)?)?;

    state.incident_service().create_incident(incident).await?;

    Ok((StatusCode::OK, "Incident created."))
}

pub async fn update_incident(
    State(state): State<Arc<AppState>>,
    Path(incident_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(body) = body.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let incident = validate_incident_payload(parse_incident_body(body)?)?;
    let id = parse_incident_id(&incident_id)?;

    state.incident_service().update_incident(id, incident).await?;

    Ok((StatusCode::OK, "Incident updated."))
}
