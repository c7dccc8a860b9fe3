use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::IncidentId;

/// Lifecycle state of an incident. Transitions are unrestricted in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Active,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Resolved];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentLevel {
    Critical,
    Info,
    Warning,
}

impl IncidentLevel {
    pub const ALL: [Self; 3] = [Self::Critical, Self::Info, Self::Warning];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
    General,
}

impl IncidentType {
    pub const ALL: [Self; 1] = [Self::General];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
        }
    }
}

/// Returned when a string is not a member of one of the incident enumerations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! string_enum_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownVariant(s.to_string()))
            }
        }
    };
}

string_enum_impls!(IncidentStatus);
string_enum_impls!(IncidentLevel);
string_enum_impls!(IncidentType);

/// A fully validated incident payload, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub incident_type: IncidentType,
    pub status: IncidentStatus,
    pub level: IncidentLevel,
    pub message: String,
}

/// An incident row as read back from the store.
///
/// The enumerated columns stay as strings: the table's CHECK constraints
/// guarantee their values, and rows are only ever echoed back to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub id: IncidentId,
    pub status: String,
    pub incident_type: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
