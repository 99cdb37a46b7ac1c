//! Roster Store - employees on the board
//!
//! [`Roster`] is the read-only view used for lookups, [`RosterStore`] the
//! mutating one. Both borrow the session's [`BoardState`]; neither owns it.

use shared::models::{BoardState, Employee, EmployeeCreate, Role, UnknownRole};
use shared::util::next_id_after;

use crate::core::{BoardError, BoardResult};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text, validate_text_len,
};

/// Read-only roster queries
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    state: &'a BoardState,
}

impl<'a> Roster<'a> {
    pub fn new(state: &'a BoardState) -> Self {
        Self { state }
    }

    pub fn find_employee(&self, id: i64) -> Option<&'a Employee> {
        self.state.employee(id)
    }

    /// Employees without a zone, in roster order
    pub fn list_unassigned(&self) -> Vec<&'a Employee> {
        self.state.staff.iter().filter(|e| !e.is_assigned()).collect()
    }

    pub fn list_all(&self) -> &'a [Employee] {
        &self.state.staff
    }

    pub fn len(&self) -> usize {
        self.state.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.staff.is_empty()
    }
}

/// Roster mutations
#[derive(Debug)]
pub struct RosterStore<'a> {
    state: &'a mut BoardState,
}

impl<'a> RosterStore<'a> {
    pub fn new(state: &'a mut BoardState) -> Self {
        Self { state }
    }

    pub fn view(&self) -> Roster<'_> {
        Roster::new(&*self.state)
    }

    /// Validate and append a new, unassigned employee
    pub fn add_employee(&mut self, data: EmployeeCreate) -> BoardResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.role, "role", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.photo, "photo", MAX_URL_LEN)?;
        for experience in &data.experiences {
            validate_text_len(experience, "experience", MAX_NOTE_LEN)?;
        }

        let role: Role = data
            .role
            .parse()
            .map_err(|e: UnknownRole| BoardError::RoleNotFound(e.0))?;

        let max_id = self.state.max_employee_id();
        let id = next_id_after(max_id).ok_or(BoardError::IdsExhausted {
            max_id: max_id.unwrap_or(i64::MAX),
        })?;

        let employee = Employee {
            id,
            name: data.name.trim().to_string(),
            role,
            photo: data.photo.map(|p| p.trim().to_string()).unwrap_or_default(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            zone: None,
            experiences: data
                .experiences
                .into_iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        };

        self.state.staff.push(employee.clone());
        tracing::info!(employee_id = employee.id, role = %employee.role, "Employee added");
        Ok(employee)
    }

    /// Remove an unassigned employee
    ///
    /// Assigned employees are refused; deletion never vacates a zone slot.
    pub fn delete_employee(&mut self, id: i64) -> BoardResult<Employee> {
        let index = self
            .state
            .staff
            .iter()
            .position(|e| e.id == id)
            .ok_or(BoardError::EmployeeNotFound(id))?;

        if let Some(zone) = self.state.staff[index].zone {
            return Err(BoardError::StillAssigned {
                employee_id: id,
                zone,
            });
        }

        let removed = self.state.staff.remove(index);
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use shared::models::ZoneId;

    fn create(name: &str, role: &str) -> EmployeeCreate {
        EmployeeCreate::new(name, role, format!("{name}@worksphere.com"), "01 02 03 04 05")
    }

    #[test]
    fn test_add_employee() {
        let mut state = BoardState::default();
        let mut store = RosterStore::new(&mut state);

        let employee = store
            .add_employee(
                create("  Ana Lopez ", "Receptionist")
                    .with_experience(" Front desk ")
                    .with_experience("   "),
            )
            .unwrap();

        assert_eq!(employee.name, "Ana Lopez");
        assert_eq!(employee.role, Role::Receptionist);
        assert_eq!(employee.zone, None);
        assert_eq!(employee.photo, "");
        assert_eq!(employee.experiences, vec!["Front desk"]);
        assert_eq!(state.staff.len(), 1);
        assert_eq!(state.staff[0], employee);
    }

    #[test]
    fn test_add_employee_blank_fields() {
        let mut state = BoardState::default();
        let mut store = RosterStore::new(&mut state);

        for data in [
            create("  ", "manager"),
            create("Ana", ""),
            EmployeeCreate::new("Ana", "manager", " ", "123"),
            EmployeeCreate::new("Ana", "manager", "a@b.c", "\t"),
        ] {
            let err = store.add_employee(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert!(state.staff.is_empty());
    }

    #[test]
    fn test_add_employee_non_ascii_name_at_limit() {
        let mut state = BoardState::default();
        let name = "Zoé".repeat(MAX_NAME_LEN / 3);
        let employee = RosterStore::new(&mut state)
            .add_employee(create(&format!(" {name} "), "other"))
            .unwrap();
        assert_eq!(employee.name, name);
    }

    #[test]
    fn test_add_employee_unknown_role() {
        let mut state = BoardState::default();
        let err = RosterStore::new(&mut state)
            .add_employee(create("Ana", "astronaut"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err, BoardError::RoleNotFound(ref r) if r == "astronaut"));
    }

    #[test]
    fn test_add_employee_when_ids_exhausted() {
        let mut state = BoardState::default();
        state.staff.push(Employee {
            id: i64::MAX,
            name: "Last".into(),
            role: Role::Other,
            photo: String::new(),
            email: "last@worksphere.com".into(),
            phone: "0".into(),
            zone: None,
            experiences: vec![],
        });
        assert!(state.is_consistent());

        let err = RosterStore::new(&mut state)
            .add_employee(create("Ana", "manager"))
            .unwrap_err();
        assert!(matches!(err, BoardError::IdsExhausted { max_id: i64::MAX }));
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert_eq!(state.staff.len(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut state = BoardState::with_sample_staff();
        let mut store = RosterStore::new(&mut state);
        let mut last = 2;
        for i in 0..50 {
            let e = store.add_employee(create(&format!("E{i}"), "other")).unwrap();
            assert!(e.id > last);
            last = e.id;
        }
        let mut ids: Vec<i64> = state.staff.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_delete_employee() {
        let mut state = BoardState::with_sample_staff();
        let removed = RosterStore::new(&mut state).delete_employee(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(state.staff.len(), 1);
        assert!(Roster::new(&state).find_employee(2).is_none());
    }

    #[test]
    fn test_delete_unknown_employee() {
        let mut state = BoardState::with_sample_staff();
        let err = RosterStore::new(&mut state).delete_employee(99).unwrap_err();
        assert!(matches!(err, BoardError::EmployeeNotFound(99)));
        assert_eq!(state.staff.len(), 2);
    }

    #[test]
    fn test_delete_assigned_employee_refused() {
        let mut state = BoardState::with_sample_staff();
        state.staff[0].zone = Some(ZoneId::Conference);
        state.zone_mut(ZoneId::Conference).unwrap().staff.push(1);
        let before = state.clone();

        let err = RosterStore::new(&mut state).delete_employee(1).unwrap_err();
        assert!(matches!(
            err,
            BoardError::StillAssigned {
                employee_id: 1,
                zone: ZoneId::Conference
            }
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_list_unassigned_in_roster_order() {
        let mut state = BoardState::with_sample_staff();
        {
            let mut store = RosterStore::new(&mut state);
            store.add_employee(create("C", "cleaner")).unwrap();
        }
        state.staff[1].zone = Some(ZoneId::Security);
        state.zone_mut(ZoneId::Security).unwrap().staff.push(2);

        let roster = Roster::new(&state);
        let names: Vec<&str> = roster
            .list_unassigned()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alex Martin", "C"]);
        assert_eq!(roster.len(), 3);
    }
}
