//! Board State Model
//!
//! The whole board in one value: the ordered roster plus the fixed zones
//! with their occupant lists. This is also the persisted blob shape.
//!
//! # Invariants
//!
//! - `employee.zone == Some(z)` ⟺ `zones[z].staff` contains `employee.id`
//! - `zones[z].staff.len() <= zones[z].capacity`
//! - employee ids are unique
//!
//! The engine maintains these incrementally. [`BoardState::check_consistency`]
//! and [`BoardState::rebuild_occupancy`] exist for recovery and tests.

use super::{Employee, Occupancy, Role, Zone, ZoneId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Roster + zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub staff: Vec<Employee>,
    #[serde(default)]
    pub zones: BTreeMap<ZoneId, Zone>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::with_default_zones()
    }
}

impl BoardState {
    /// Empty roster with the six built-in zones
    pub fn with_default_zones() -> Self {
        let zones = ZoneId::ALL
            .into_iter()
            .map(|id| (id, Zone::default_for(id)))
            .collect();
        Self {
            staff: Vec::new(),
            zones,
        }
    }

    /// Built-in zones plus two sample employees, for demo boards
    pub fn with_sample_staff() -> Self {
        let mut state = Self::with_default_zones();
        state.staff = vec![
            Employee {
                id: 1,
                name: "Alex Martin".to_string(),
                role: Role::Manager,
                photo: String::new(),
                email: "alex@worksphere.com".to_string(),
                phone: "01 23 45 67 89".to_string(),
                zone: None,
                experiences: Vec::new(),
            },
            Employee {
                id: 2,
                name: "Sam Rivera".to_string(),
                role: Role::Security,
                photo: String::new(),
                email: "sam@worksphere.com".to_string(),
                phone: "06 23 45 57 89".to_string(),
                zone: None,
                experiences: Vec::new(),
            },
        ];
        state
    }

    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.staff.iter().find(|e| e.id == id)
    }

    pub fn employee_mut(&mut self, id: i64) -> Option<&mut Employee> {
        self.staff.iter_mut().find(|e| e.id == id)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(&id)
    }

    pub fn occupancy(&self, id: ZoneId) -> Option<Occupancy> {
        self.zone(id).map(Zone::occupancy)
    }

    pub fn max_employee_id(&self) -> Option<i64> {
        self.staff.iter().map(|e| e.id).max()
    }

    /// Insert any built-in zone missing from the map
    ///
    /// Returns the zones that had to be added.
    pub fn ensure_default_zones(&mut self) -> Vec<ZoneId> {
        let mut added = Vec::new();
        for id in ZoneId::ALL {
            if !self.zones.contains_key(&id) {
                self.zones.insert(id, Zone::default_for(id));
                added.push(id);
            }
        }
        added
    }

    /// Rebuild every occupant list from the employees' zone fields
    ///
    /// Employees are placed in roster order. Anyone who no longer fits
    /// (zone over capacity) is unassigned; their ids are returned.
    pub fn rebuild_occupancy(&mut self) -> Vec<i64> {
        self.ensure_default_zones();
        for zone in self.zones.values_mut() {
            zone.staff.clear();
        }

        let mut bumped = Vec::new();
        for employee in &mut self.staff {
            let Some(zone_id) = employee.zone else {
                continue;
            };
            match self.zones.get_mut(&zone_id) {
                Some(zone) if !zone.is_full() => zone.staff.push(employee.id),
                _ => {
                    employee.zone = None;
                    bumped.push(employee.id);
                }
            }
        }
        bumped
    }

    /// Report every invariant violation; empty means consistent
    pub fn check_consistency(&self) -> Vec<Inconsistency> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for employee in &self.staff {
            if !seen.insert(employee.id) {
                issues.push(Inconsistency::DuplicateEmployee {
                    employee_id: employee.id,
                });
            }
        }

        for id in ZoneId::ALL {
            if !self.zones.contains_key(&id) {
                issues.push(Inconsistency::MissingZone { zone: id });
            }
        }

        for employee in &self.staff {
            if let Some(zone_id) = employee.zone
                && !self.zones.get(&zone_id).is_some_and(|z| z.contains(employee.id))
            {
                issues.push(Inconsistency::MissingOccupant {
                    employee_id: employee.id,
                    zone: zone_id,
                });
            }
        }

        for (&zone_id, zone) in &self.zones {
            if zone.capacity == 0 {
                issues.push(Inconsistency::ZeroCapacity { zone: zone_id });
            }
            if zone.staff.len() > zone.capacity as usize {
                issues.push(Inconsistency::OverCapacity {
                    zone: zone_id,
                    assigned: zone.staff.len(),
                    capacity: zone.capacity,
                });
            }

            let mut listed = HashSet::new();
            for &employee_id in &zone.staff {
                if !listed.insert(employee_id) {
                    issues.push(Inconsistency::DuplicateOccupant {
                        zone: zone_id,
                        employee_id,
                    });
                    continue;
                }
                match self.employee(employee_id) {
                    None => issues.push(Inconsistency::UnknownOccupant {
                        zone: zone_id,
                        employee_id,
                    }),
                    Some(e) if e.zone != Some(zone_id) => {
                        issues.push(Inconsistency::StrayOccupant {
                            zone: zone_id,
                            employee_id,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        issues
    }

    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_empty()
    }
}

/// A single invariant violation found by [`BoardState::check_consistency`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inconsistency {
    DuplicateEmployee { employee_id: i64 },
    MissingZone { zone: ZoneId },
    ZeroCapacity { zone: ZoneId },
    /// Employee points at a zone that does not list them
    MissingOccupant { employee_id: i64, zone: ZoneId },
    /// Zone lists an id with no matching employee
    UnknownOccupant { zone: ZoneId, employee_id: i64 },
    /// Zone lists an employee whose zone field points elsewhere
    StrayOccupant { zone: ZoneId, employee_id: i64 },
    DuplicateOccupant { zone: ZoneId, employee_id: i64 },
    OverCapacity {
        zone: ZoneId,
        assigned: usize,
        capacity: u32,
    },
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmployee { employee_id } => {
                write!(f, "employee id {employee_id} appears twice")
            }
            Self::MissingZone { zone } => write!(f, "zone {zone} is missing"),
            Self::ZeroCapacity { zone } => write!(f, "zone {zone} has zero capacity"),
            Self::MissingOccupant { employee_id, zone } => {
                write!(f, "employee {employee_id} is in {zone} but not listed there")
            }
            Self::UnknownOccupant { zone, employee_id } => {
                write!(f, "zone {zone} lists unknown employee {employee_id}")
            }
            Self::StrayOccupant { zone, employee_id } => {
                write!(f, "zone {zone} lists employee {employee_id} assigned elsewhere")
            }
            Self::DuplicateOccupant { zone, employee_id } => {
                write!(f, "zone {zone} lists employee {employee_id} twice")
            }
            Self::OverCapacity {
                zone,
                assigned,
                capacity,
            } => write!(f, "zone {zone} holds {assigned} of {capacity}"),
        }
    }
}
