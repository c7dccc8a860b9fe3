//! Domain primitives for the incident admin service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of an incident row.
///
/// Assigned by the database on insert and never changed afterwards.
///
/// # Examples
///
/// ```rust
/// use incident_admin::domain::IncidentId;
///
/// let id: IncidentId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IncidentId(i32);

impl IncidentId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<IncidentId> for i32 {
    fn from(id: IncidentId) -> Self {
        id.0
    }
}

impl From<i32> for IncidentId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl FromStr for IncidentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

impl Serialize for IncidentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for IncidentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_incident_id() {
        assert_eq!("7".parse::<IncidentId>().unwrap(), IncidentId::new(7));
        assert_eq!(" 12 ".parse::<IncidentId>().unwrap().value(), 12);
        assert!("abc".parse::<IncidentId>().is_err());
        assert!("".parse::<IncidentId>().is_err());
        assert!("1.5".parse::<IncidentId>().is_err());
    }

    #[test]
    fn test_incident_id_serde() {
        let id = IncidentId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: IncidentId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
