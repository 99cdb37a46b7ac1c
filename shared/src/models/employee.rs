//! Employee Model

use super::{Role, ZoneId};
use serde::{Deserialize, Serialize};

/// Employee on the board roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: Role,
    /// Photo URI or path, empty when none
    #[serde(default)]
    pub photo: String,
    pub email: String,
    pub phone: String,
    /// Current zone, `None` while unassigned
    #[serde(default)]
    pub zone: Option<ZoneId>,
    #[serde(default)]
    pub experiences: Vec<String>,
}

impl Employee {
    pub fn is_assigned(&self) -> bool {
        self.zone.is_some()
    }
}

/// Create employee payload
///
/// Role is carried as text so a blank or unknown role surfaces as a
/// validation failure rather than a parse failure in the front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
}

impl EmployeeCreate {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
            photo: None,
            experiences: Vec::new(),
        }
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experiences.push(experience.into());
        self
    }
}
