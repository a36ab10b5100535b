use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a registration.
///
/// Values outside the three known statuses are kept verbatim so they can be
/// reported, but reconciliation does not count them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegistrationStatus {
    Approved,
    Rejected,
    Waitlisted,
    Unrecognized(String),
}

impl RegistrationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "waitlisted" => Self::Waitlisted,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Waitlisted => "waitlisted",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for RegistrationStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for RegistrationStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<RegistrationStatus> for String {
    fn from(value: RegistrationStatus) -> Self {
        match value {
            RegistrationStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: String,
    pub workshop_id: String,
    pub name: String,
    pub status: RegistrationStatus,
}

impl RegistrationRecord {
    /// Creates a record with a freshly generated id.
    pub fn new(
        workshop_id: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<RegistrationStatus>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), workshop_id, name, status)
    }

    pub fn with_id(
        id: impl Into<String>,
        workshop_id: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<RegistrationStatus>,
    ) -> Self {
        Self {
            id: id.into(),
            workshop_id: workshop_id.into(),
            name: name.into(),
            status: status.into(),
        }
    }
}
