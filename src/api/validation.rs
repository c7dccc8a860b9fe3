use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use super::IncidentPayload;
use crate::domain::IncidentId;
use crate::models::{IncidentLevel, IncidentStatus, IncidentType, NewIncident};

/// Why an incident request was rejected before touching the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("unexpected key '{0}'")]
    UnknownField(String),

    #[error("missing key '{0}'")]
    MissingField(&'static str),

    #[error("key '{field}' must be a string, got {found}")]
    NotAString {
        field: &'static str,
        found: &'static str,
    },

    #[error("key '{0}' must not be empty")]
    Empty(&'static str),

    #[error("key '{field}' has value '{value}', expected one of: {allowed}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("invalid incident id '{0}'")]
    InvalidIncidentId(String),
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Splits a JSON request body into its incident fields.
///
/// Only objects are accepted, and every key must be one of the four incident
/// fields. Keys present with a `null` value stay `Some(Value::Null)`.
pub fn parse_incident_body(body: Value) -> Result<IncidentPayload, ValidationError> {
    let Value::Object(mut fields) = body else {
        return Err(ValidationError::NotAnObject(json_kind(&body)));
    };

    let payload = IncidentPayload {
        incident_type: fields.remove("incident_type"),
        status: fields.remove("status"),
        level: fields.remove("level"),
        message: fields.remove("message"),
    };

    if let Some(key) = fields.keys().next() {
        return Err(ValidationError::UnknownField(key.clone()));
    }

    Ok(payload)
}

/// Requires `value` to be present and a non-empty JSON string.
pub fn require_string(field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ValidationError::NotAString {
            field,
            found: json_kind(&other),
        }),
    }
}

/// Requires `value` to be a non-empty string naming one of `allowed`.
pub fn require_member<T>(
    field: &'static str,
    value: Option<Value>,
    allowed: &[&str],
) -> Result<T, ValidationError>
where
    T: FromStr,
{
    let raw = require_string(field, value)?;
    raw.parse::<T>().map_err(|_| ValidationError::NotAllowed {
        field,
        value: raw,
        allowed: allowed.join(", "),
    })
}

/// Checks every field of an incident payload and builds the typed record.
///
/// Fields are checked in a fixed order and the first failure is reported.
pub fn validate_incident_payload(payload: IncidentPayload) -> Result<NewIncident, ValidationError> {
    let incident_type = require_member::<IncidentType>(
        "incident_type",
        payload.incident_type,
        &IncidentType::ALL.map(|v| v.as_str()),
    )?;
    let status = require_member::<IncidentStatus>(
        "status",
        payload.status,
        &IncidentStatus::ALL.map(|v| v.as_str()),
    )?;
    let level = require_member::<IncidentLevel>(
        "level",
        payload.level,
        &IncidentLevel::ALL.map(|v| v.as_str()),
    )?;
    let message = require_string("message", payload.message)?;

    Ok(NewIncident {
        incident_type,
        status,
        level,
        message,
    })
}

pub fn parse_incident_id(raw: &str) -> Result<IncidentId, ValidationError> {
    raw.parse::<IncidentId>()
        .map_err(|_| ValidationError::InvalidIncidentId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> IncidentPayload {
        parse_incident_body(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "incident_type": "general",
            "status": "active",
            "level": "critical",
            "message": "DB down"
        })
    }

    #[test]
    fn test_valid_payload() {
        let incident = validate_incident_payload(payload(valid())).unwrap();
        assert_eq!(incident.incident_type, IncidentType::General);
        assert_eq!(incident.status, IncidentStatus::Active);
        assert_eq!(incident.level, IncidentLevel::Critical);
        assert_eq!(incident.message, "DB down");
    }

    #[test]
    fn test_missing_field() {
        let mut body = valid();
        body.as_object_mut().unwrap().remove("level");
        assert_eq!(
            validate_incident_payload(payload(body)),
            Err(ValidationError::MissingField("level"))
        );
    }

    #[test]
    fn test_wrong_type() {
        let mut body = valid();
        body["status"] = json!(1);
        assert_eq!(
            validate_incident_payload(payload(body)),
            Err(ValidationError::NotAString {
                field: "status",
                found: "number"
            })
        );

        let mut body = valid();
        body["message"] = Value::Null;
        assert!(matches!(
            validate_incident_payload(payload(body)),
            Err(ValidationError::NotAString {
                field: "message",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_values() {
        let mut body = valid();
        body["message"] = json!("");
        assert_eq!(
            validate_incident_payload(payload(body)),
            Err(ValidationError::Empty("message"))
        );

        let mut body = valid();
        body["incident_type"] = json!("");
        assert_eq!(
            validate_incident_payload(payload(body)),
            Err(ValidationError::Empty("incident_type"))
        );
    }

    #[test]
    fn test_values_outside_enumeration() {
        for (field, value) in [
            ("incident_type", "outage"),
            ("incident_type", "gen"),
            ("status", "closed"),
            ("level", "error"),
            ("level", "CRITICAL"),
        ] {
            let mut body = valid();
            body[field] = json!(value);
            let err = validate_incident_payload(payload(body)).unwrap_err();
            assert!(
                matches!(err, ValidationError::NotAllowed { field: f, .. } if f == field),
                "{field}={value} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_not_allowed_message_lists_members() {
        let mut body = valid();
        body["level"] = json!("fatal");
        let err = validate_incident_payload(payload(body)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "key 'level' has value 'fatal', expected one of: critical, info, warning"
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut body = valid();
        body["id"] = json!(5);
        assert_eq!(
            parse_incident_body(body).unwrap_err(),
            ValidationError::UnknownField("id".to_string())
        );
    }

    #[test]
    fn test_only_objects_are_accepted() {
        let positional = json!(["general", "active", "critical", "from array"]);
        assert_eq!(
            parse_incident_body(positional).unwrap_err(),
            ValidationError::NotAnObject("array")
        );
        assert_eq!(
            parse_incident_body(json!("general")).unwrap_err(),
            ValidationError::NotAnObject("string")
        );
        assert_eq!(
            parse_incident_body(Value::Null).unwrap_err(),
            ValidationError::NotAnObject("null")
        );
    }

    #[test]
    fn test_null_is_not_missing() {
        let mut body = valid();
        body["level"] = Value::Null;
        let parsed = payload(body);
        assert_eq!(parsed.level, Some(Value::Null));
        assert_eq!(
            validate_incident_payload(parsed),
            Err(ValidationError::NotAString {
                field: "level",
                found: "null"
            })
        );
    }

    #[test]
    fn test_parse_incident_id() {
        assert_eq!(parse_incident_id("4").unwrap().value(), 4);
        assert_eq!(
            parse_incident_id("four"),
            Err(ValidationError::InvalidIncidentId("four".to_string()))
        );
    }
}
