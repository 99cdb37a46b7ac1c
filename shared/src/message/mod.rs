//! Board change notifications
//!
//! Emitted after every mutation that changed the board, once the new
//! state has been handed to persistence. Front ends re-render on receipt.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ZoneId;

/// Board change event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    EmployeeAdded {
        employee_id: i64,
    },
    EmployeeDeleted {
        employee_id: i64,
    },
    /// `from` is the zone the employee left, if this was a move
    Assigned {
        employee_id: i64,
        from: Option<ZoneId>,
        to: ZoneId,
    },
    Unassigned {
        employee_id: i64,
        from: ZoneId,
    },
    /// Whole board replaced (reset or recovery)
    Reset,
}

impl BoardEvent {
    /// Employee the event is about, if any
    pub fn employee_id(&self) -> Option<i64> {
        match self {
            BoardEvent::EmployeeAdded { employee_id }
            | BoardEvent::EmployeeDeleted { employee_id }
            | BoardEvent::Assigned { employee_id, .. }
            | BoardEvent::Unassigned { employee_id, .. } => Some(*employee_id),
            BoardEvent::Reset => None,
        }
    }
}

impl fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardEvent::EmployeeAdded { employee_id } => {
                write!(f, "employee_added({employee_id})")
            }
            BoardEvent::EmployeeDeleted { employee_id } => {
                write!(f, "employee_deleted({employee_id})")
            }
            BoardEvent::Assigned {
                employee_id,
                from: Some(from),
                to,
            } => write!(f, "moved({employee_id}: {from} -> {to})"),
            BoardEvent::Assigned {
                employee_id,
                from: None,
                to,
            } => write!(f, "assigned({employee_id} -> {to})"),
            BoardEvent::Unassigned { employee_id, from } => {
                write!(f, "unassigned({employee_id} <- {from})")
            }
            BoardEvent::Reset => write!(f, "reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialize_tagged() {
        let event = BoardEvent::Assigned {
            employee_id: 3,
            from: Some(ZoneId::Conference),
            to: ZoneId::Reception,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "assigned");
        assert_eq!(json["from"], "conference");
        assert_eq!(json["to"], "reception");
    }

    #[test]
    fn test_event_display() {
        let moved = BoardEvent::Assigned {
            employee_id: 3,
            from: Some(ZoneId::Conference),
            to: ZoneId::Reception,
        };
        assert_eq!(moved.to_string(), "moved(3: conference -> reception)");
        assert_eq!(moved.employee_id(), Some(3));
        assert_eq!(BoardEvent::Reset.employee_id(), None);
    }
}
