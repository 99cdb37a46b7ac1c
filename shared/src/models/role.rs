//! Role Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Job role of an employee
///
/// Closed set; zone eligibility rules are expressed over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Receptionist,
    Technician,
    Security,
    Cleaner,
    Other,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Manager,
        Role::Receptionist,
        Role::Technician,
        Role::Security,
        Role::Cleaner,
        Role::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Receptionist => "receptionist",
            Role::Technician => "technician",
            Role::Security => "security",
            Role::Cleaner => "cleaner",
            Role::Other => "other",
        }
    }

    /// Display label for board cards
    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Receptionist => "Receptionist",
            Role::Technician => "IT Technician",
            Role::Security => "Security Agent",
            Role::Cleaner => "Cleaning",
            Role::Other => "Other",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when a role string names none of the known roles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.trim().to_string()))
    }
}
