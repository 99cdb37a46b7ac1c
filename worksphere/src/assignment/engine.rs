//! Assignment Engine
//!
//! Moves employees into, out of and between zones.
//!
//! # Assign Flow
//!
//! ```text
//! assign(employee_id, zone)
//!     ├─ 1. Zone and employee lookup      → ZoneNotFound / EmployeeNotFound
//!     ├─ 2. Role eligibility              → NotEligible
//!     ├─ 3. Already there?                → Unchanged
//!     ├─ 4. Capacity (after vacating old) → ZoneFull
//!     └─ 5. Vacate old zone, occupy new
//! ```
//!
//! Nothing is mutated until every check has passed, so a failed call
//! leaves the board untouched.

use shared::models::{BoardState, Employee, Occupancy, Role, ZoneId};

use super::EligibilityTable;
use crate::core::{BoardError, BoardResult};
use crate::roster::Roster;

/// Result of a successful [`AssignmentEngine::assign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// Employee entered the zone, leaving `from` if it was a move
    Assigned { from: Option<ZoneId> },
    /// Employee was already in the zone
    Unchanged,
}

/// Read-only assignment queries
#[derive(Debug, Clone, Copy)]
pub struct Assignments<'a> {
    state: &'a BoardState,
    rules: &'a EligibilityTable,
}

impl<'a> Assignments<'a> {
    pub fn new(state: &'a BoardState, rules: &'a EligibilityTable) -> Self {
        Self { state, rules }
    }

    pub fn is_eligible(&self, role: Role, zone: ZoneId) -> bool {
        self.rules.allows(role, zone)
    }

    /// Unassigned employees allowed into `zone`, in roster order
    ///
    /// Empty when nobody qualifies; that is not an error.
    pub fn list_eligible(&self, zone: ZoneId) -> Vec<&'a Employee> {
        let rules = self.rules;
        Roster::new(self.state)
            .list_unassigned()
            .into_iter()
            .filter(|e| rules.allows(e.role, zone))
            .collect()
    }

    /// Employees in `zone`, in assignment order
    pub fn occupants(&self, zone: ZoneId) -> BoardResult<Vec<&'a Employee>> {
        let roster = Roster::new(self.state);
        let zone = self
            .state
            .zone(zone)
            .ok_or_else(|| BoardError::ZoneNotFound(zone.to_string()))?;
        Ok(zone
            .staff
            .iter()
            .filter_map(|id| roster.find_employee(*id))
            .collect())
    }

    pub fn occupancy(&self, zone: ZoneId) -> BoardResult<Occupancy> {
        self.state
            .occupancy(zone)
            .ok_or_else(|| BoardError::ZoneNotFound(zone.to_string()))
    }
}

/// Zone mutations
#[derive(Debug)]
pub struct AssignmentEngine<'a> {
    state: &'a mut BoardState,
    rules: &'a EligibilityTable,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(state: &'a mut BoardState, rules: &'a EligibilityTable) -> Self {
        Self { state, rules }
    }

    pub fn view(&self) -> Assignments<'_> {
        Assignments::new(&*self.state, self.rules)
    }

    /// Put an employee into `zone`, moving them out of their current zone
    pub fn assign(&mut self, employee_id: i64, zone: ZoneId) -> BoardResult<AssignOutcome> {
        let target = self
            .state
            .zone(zone)
            .ok_or_else(|| BoardError::ZoneNotFound(zone.to_string()))?;
        let employee = Roster::new(&*self.state)
            .find_employee(employee_id)
            .ok_or(BoardError::EmployeeNotFound(employee_id))?;

        if !self.rules.allows(employee.role, zone) {
            tracing::debug!(employee_id, role = %employee.role, %zone, "Assignment refused: role not allowed");
            return Err(BoardError::NotEligible {
                employee_id,
                role: employee.role,
                zone,
            });
        }

        let current = employee.zone;
        if current == Some(zone) {
            return Ok(AssignOutcome::Unchanged);
        }

        // The employee is not in the target zone, so vacating their current
        // zone frees nothing here: the target count stands as is.
        let occupied = target.staff.iter().filter(|id| **id != employee_id).count();
        if occupied >= target.capacity as usize {
            tracing::debug!(employee_id, %zone, capacity = target.capacity, "Assignment refused: zone full");
            return Err(BoardError::ZoneFull {
                zone,
                capacity: target.capacity,
            });
        }

        if let Some(old) = current
            && let Some(old_zone) = self.state.zone_mut(old)
        {
            old_zone.remove(employee_id);
        }
        if let Some(employee) = self.state.employee_mut(employee_id) {
            employee.zone = Some(zone);
        }
        if let Some(target) = self.state.zone_mut(zone) {
            target.staff.push(employee_id);
        }

        match current {
            Some(from) => tracing::info!(employee_id, %from, to = %zone, "Employee moved"),
            None => tracing::info!(employee_id, %zone, "Employee assigned"),
        }
        Ok(AssignOutcome::Assigned { from: current })
    }

    /// Take an employee out of their zone
    ///
    /// Returns the zone they left; `None` if they were already unassigned.
    pub fn unassign(&mut self, employee_id: i64) -> BoardResult<Option<ZoneId>> {
        let employee = self
            .state
            .employee_mut(employee_id)
            .ok_or(BoardError::EmployeeNotFound(employee_id))?;

        let Some(from) = employee.zone.take() else {
            return Ok(None);
        };

        if let Some(zone) = self.state.zone_mut(from) {
            zone.remove(employee_id);
        }
        tracing::info!(employee_id, %from, "Employee unassigned");
        Ok(Some(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::ZoneAccess;
    use crate::core::ErrorKind;

    fn add(state: &mut BoardState, id: i64, role: Role) {
        state.staff.push(Employee {
            id,
            name: format!("Employee {id}"),
            role,
            photo: String::new(),
            email: format!("e{id}@worksphere.com"),
            phone: "000".to_string(),
            zone: None,
            experiences: Vec::new(),
        });
    }

    #[test]
    fn test_assign_unassigned() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Technician);

        let outcome = AssignmentEngine::new(&mut state, &rules)
            .assign(1, ZoneId::Server)
            .unwrap();

        assert_eq!(outcome, AssignOutcome::Assigned { from: None });
        assert_eq!(state.employee(1).unwrap().zone, Some(ZoneId::Server));
        assert_eq!(state.zone(ZoneId::Server).unwrap().staff, vec![1]);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_assign_unknown_employee() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        let err = AssignmentEngine::new(&mut state, &rules)
            .assign(7, ZoneId::Staff)
            .unwrap_err();
        assert!(matches!(err, BoardError::EmployeeNotFound(7)));
    }

    #[test]
    fn test_assign_missing_zone() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        state.zones.remove(&ZoneId::Archive);
        add(&mut state, 1, Role::Other);

        let err = AssignmentEngine::new(&mut state, &rules)
            .assign(1, ZoneId::Archive)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(state.employee(1).unwrap().zone, None);
    }

    #[test]
    fn test_ineligible_leaves_prior_zone() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Security);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Staff).unwrap();
        let err = engine.assign(1, ZoneId::Server).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Eligibility);
        assert_eq!(state.employee(1).unwrap().zone, Some(ZoneId::Staff));
        assert_eq!(state.zone(ZoneId::Staff).unwrap().staff, vec![1]);
        assert!(state.zone(ZoneId::Server).unwrap().staff.is_empty());
    }

    #[test]
    fn test_eligibility_checked_before_capacity() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        state.zone_mut(ZoneId::Server).unwrap().capacity = 1;
        add(&mut state, 1, Role::Technician);
        add(&mut state, 2, Role::Cleaner);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Server).unwrap();
        let err = engine.assign(2, ZoneId::Server).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Eligibility);
    }

    #[test]
    fn test_move_between_zones() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Manager);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Conference).unwrap();
        let outcome = engine.assign(1, ZoneId::Reception).unwrap();

        assert_eq!(
            outcome,
            AssignOutcome::Assigned {
                from: Some(ZoneId::Conference)
            }
        );
        assert!(state.zone(ZoneId::Conference).unwrap().staff.is_empty());
        assert_eq!(state.zone(ZoneId::Reception).unwrap().staff, vec![1]);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_reassign_same_zone_when_full_is_unchanged() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        state.zone_mut(ZoneId::Archive).unwrap().capacity = 1;
        add(&mut state, 1, Role::Other);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Archive).unwrap();
        let outcome = engine.assign(1, ZoneId::Archive).unwrap();

        assert_eq!(outcome, AssignOutcome::Unchanged);
        assert_eq!(state.zone(ZoneId::Archive).unwrap().staff, vec![1]);
    }

    #[test]
    fn test_move_into_full_zone_refused() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        state.zone_mut(ZoneId::Archive).unwrap().capacity = 1;
        add(&mut state, 1, Role::Other);
        add(&mut state, 2, Role::Other);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Archive).unwrap();
        engine.assign(2, ZoneId::Staff).unwrap();
        let err = engine.assign(2, ZoneId::Archive).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(state.employee(2).unwrap().zone, Some(ZoneId::Staff));
        assert_eq!(state.zone(ZoneId::Staff).unwrap().staff, vec![2]);
    }

    #[test]
    fn test_unassign() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Cleaner);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(1, ZoneId::Staff).unwrap();
        assert_eq!(engine.unassign(1).unwrap(), Some(ZoneId::Staff));
        assert_eq!(engine.unassign(1).unwrap(), None);
        assert!(matches!(
            engine.unassign(5).unwrap_err(),
            BoardError::EmployeeNotFound(5)
        ));

        assert!(state.zone(ZoneId::Staff).unwrap().staff.is_empty());
        assert_eq!(state.employee(1).unwrap().zone, None);
    }

    #[test]
    fn test_list_eligible() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Receptionist);
        add(&mut state, 2, Role::Cleaner);
        add(&mut state, 3, Role::Manager);
        add(&mut state, 4, Role::Receptionist);

        AssignmentEngine::new(&mut state, &rules)
            .assign(4, ZoneId::Conference)
            .unwrap();

        let view = Assignments::new(&state, &rules);
        let ids: Vec<i64> = view
            .list_eligible(ZoneId::Reception)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let ids: Vec<i64> = view.list_eligible(ZoneId::Archive).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let closed = EligibilityTable::defaults().with_rule(ZoneId::Archive, ZoneAccess::closed());
        assert!(
            Assignments::new(&state, &closed)
                .list_eligible(ZoneId::Archive)
                .is_empty()
        );
    }

    #[test]
    fn test_occupants_and_occupancy() {
        let rules = EligibilityTable::defaults();
        let mut state = BoardState::default();
        add(&mut state, 1, Role::Other);
        add(&mut state, 2, Role::Other);

        let mut engine = AssignmentEngine::new(&mut state, &rules);
        engine.assign(2, ZoneId::Conference).unwrap();
        engine.assign(1, ZoneId::Conference).unwrap();

        let view = engine.view();
        let ids: Vec<i64> = view
            .occupants(ZoneId::Conference)
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(view.occupancy(ZoneId::Conference).unwrap().to_string(), "2/8");
    }
}
