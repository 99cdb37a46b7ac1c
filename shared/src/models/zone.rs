//! Zone Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Fixed physical zone of the workplace
///
/// Zones are static configuration; they cannot be created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    Conference,
    Reception,
    Server,
    Security,
    Staff,
    Archive,
}

impl ZoneId {
    pub const ALL: [ZoneId; 6] = [
        ZoneId::Conference,
        ZoneId::Reception,
        ZoneId::Server,
        ZoneId::Security,
        ZoneId::Staff,
        ZoneId::Archive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneId::Conference => "conference",
            ZoneId::Reception => "reception",
            ZoneId::Server => "server",
            ZoneId::Security => "security",
            ZoneId::Staff => "staff",
            ZoneId::Archive => "archive",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            ZoneId::Conference => "Conference Room",
            ZoneId::Reception => "Reception",
            ZoneId::Server => "Server Room",
            ZoneId::Security => "Security Room",
            ZoneId::Staff => "Staff Room",
            ZoneId::Archive => "Archive Room",
        }
    }

    pub fn default_capacity(&self) -> u32 {
        match self {
            ZoneId::Conference => 8,
            ZoneId::Reception => 4,
            ZoneId::Server => 6,
            ZoneId::Security => 4,
            ZoneId::Staff => 12,
            ZoneId::Archive => 4,
        }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when a zone string names none of the fixed zones
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zone: {0}")]
pub struct UnknownZone(pub String);

impl FromStr for ZoneId {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ZoneId::ALL
            .into_iter()
            .find(|zone| zone.as_str() == normalized)
            .ok_or_else(|| UnknownZone(s.trim().to_string()))
    }
}

/// Zone entity with its occupant list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub capacity: u32,
    /// Occupant employee ids, in assignment order
    #[serde(default)]
    pub staff: Vec<i64>,
}

impl Zone {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            staff: Vec::new(),
        }
    }

    /// Zone with the built-in name and capacity
    pub fn default_for(id: ZoneId) -> Self {
        Self::new(id.default_name(), id.default_capacity())
    }

    pub fn contains(&self, employee_id: i64) -> bool {
        self.staff.contains(&employee_id)
    }

    pub fn is_full(&self) -> bool {
        self.staff.len() >= self.capacity as usize
    }

    /// Remove an occupant, returning whether it was present
    pub fn remove(&mut self, employee_id: i64) -> bool {
        let before = self.staff.len();
        self.staff.retain(|id| *id != employee_id);
        self.staff.len() != before
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            assigned: self.staff.len(),
            capacity: self.capacity,
        }
    }
}

/// Occupant count against capacity, rendered as `assigned/capacity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub assigned: usize,
    pub capacity: u32,
}

impl Occupancy {
    pub fn free(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.assigned)
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.assigned, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let total: u32 = ZoneId::ALL.iter().map(|z| z.default_capacity()).sum();
        assert_eq!(total, 38);
        assert_eq!(ZoneId::Staff.default_capacity(), 12);
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!("Reception".parse::<ZoneId>(), Ok(ZoneId::Reception));
        assert_eq!(
            "kitchen".parse::<ZoneId>(),
            Err(UnknownZone("kitchen".to_string()))
        );
    }

    #[test]
    fn test_zone_occupants() {
        let mut zone = Zone::new("Archive Room", 2);
        zone.staff.push(10);
        assert!(zone.contains(10));
        assert!(!zone.is_full());
        zone.staff.push(11);
        assert!(zone.is_full());
        assert_eq!(zone.occupancy().to_string(), "2/2");
        assert_eq!(zone.occupancy().free(), 0);

        assert!(zone.remove(10));
        assert!(!zone.remove(10));
        assert_eq!(zone.staff, vec![11]);
    }
}
