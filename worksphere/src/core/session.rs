//! BoardSession - the single owner of the board
//!
//! Every roster and assignment operation goes through here. The session
//! lends its [`BoardState`] to [`RosterStore`] / [`AssignmentEngine`] for
//! the duration of one call, then commits.
//!
//! # Mutation Flow
//!
//! ```text
//! session.assign(id, zone)
//!     ├─ 1. Engine validates and mutates the in-memory board
//!     ├─ 2. Board saved through the gateway (failure is logged, not rolled back)
//!     ├─ 3. BoardEvent broadcast to subscribers
//!     └─ 4. Outcome returned
//! ```
//!
//! Calls that change nothing (unassigning an unassigned employee,
//! re-assigning to the same zone) skip steps 2 and 3.

use shared::message::BoardEvent;
use shared::models::{
    BoardState, Employee, EmployeeCreate, Inconsistency, Occupancy, Role, ZoneId,
};
use tokio::sync::broadcast;

use crate::assignment::{AssignOutcome, AssignmentEngine, Assignments, EligibilityTable};
use crate::core::{BoardError, BoardResult, Config};
use crate::roster::{Roster, RosterStore};
use crate::storage::{RedbGateway, StateGateway};

/// Board event channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// One zone as shown on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSummary {
    pub id: ZoneId,
    pub name: String,
    pub occupancy: Occupancy,
    /// `None` when every role is admitted
    pub allowed_roles: Option<Vec<Role>>,
}

/// Parse a zone name as typed by a user
pub fn parse_zone(name: &str) -> BoardResult<ZoneId> {
    name.parse()
        .map_err(|_| BoardError::ZoneNotFound(name.trim().to_string()))
}

/// Board controller owning state, rules, persistence and notifications
pub struct BoardSession<G: StateGateway = RedbGateway> {
    state: BoardState,
    rules: EligibilityTable,
    gateway: G,
    event_tx: broadcast::Sender<BoardEvent>,
}

impl<G: StateGateway> std::fmt::Debug for BoardSession<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSession")
            .field("employees", &self.state.staff.len())
            .field("rules", &self.rules)
            .field("event_tx", &"<broadcast::Sender>")
            .finish_non_exhaustive()
    }
}

impl BoardSession<RedbGateway> {
    /// Open the board described by `config`
    ///
    /// Opens (or creates) the database in the work directory. A fresh board
    /// gets the sample staff when `seed_sample_staff` is set.
    pub fn open_with_config(config: &Config) -> BoardResult<Self> {
        let gateway = RedbGateway::open(config.db_path())?;
        let rules =
            EligibilityTable::defaults().with_fallback(config.unlisted_zone_access.clone());
        let fresh = if config.seed_sample_staff {
            BoardState::with_sample_staff()
        } else {
            BoardState::with_default_zones()
        };
        Ok(Self::open_or(gateway, rules, fresh))
    }
}

impl<G: StateGateway> BoardSession<G> {
    /// Load the stored board, falling back to an empty default board
    pub fn open(gateway: G, rules: EligibilityTable) -> Self {
        Self::open_or(gateway, rules, BoardState::with_default_zones())
    }

    /// Load the stored board, falling back to `fresh`
    ///
    /// A loaded board that breaks an invariant is repaired with a full
    /// occupancy rescan and saved back.
    pub fn open_or(gateway: G, rules: EligibilityTable, fresh: BoardState) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let (state, repaired) = match gateway.load() {
            Some(mut state) => {
                let repaired = Self::repair(&mut state);
                (state, repaired)
            }
            None => {
                tracing::info!(employees = fresh.staff.len(), "Starting with a fresh board");
                (fresh, false)
            }
        };

        let session = Self {
            state,
            rules,
            gateway,
            event_tx,
        };
        if repaired {
            session.persist();
        }
        session
    }

    /// Restore invariants on a loaded board; returns whether anything changed
    fn repair(state: &mut BoardState) -> bool {
        let added = state.ensure_default_zones();
        for zone in &added {
            tracing::warn!(%zone, "Stored board lacked a zone, restored default");
        }

        let issues = state.check_consistency();
        if issues.is_empty() {
            return !added.is_empty();
        }
        for issue in &issues {
            tracing::warn!(%issue, "Stored board inconsistent");
        }

        let bumped = state.rebuild_occupancy();
        if !bumped.is_empty() {
            tracing::warn!(?bumped, "Employees unassigned to respect zone capacity");
        }
        let remaining = state.check_consistency();
        if !remaining.is_empty() {
            // duplicate ids and zero capacities cannot be rebuilt away
            tracing::error!(issues = remaining.len(), "Board still inconsistent after rescan");
        }
        true
    }

    // ========== Accessors ==========

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn rules(&self) -> &EligibilityTable {
        &self.rules
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Subscribe to board change events
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.event_tx.subscribe()
    }

    fn roster(&self) -> Roster<'_> {
        Roster::new(&self.state)
    }

    fn assignments(&self) -> Assignments<'_> {
        Assignments::new(&self.state, &self.rules)
    }

    // ========== Roster operations ==========

    pub fn add_employee(&mut self, data: EmployeeCreate) -> BoardResult<Employee> {
        let employee = RosterStore::new(&mut self.state).add_employee(data)?;
        self.commit(BoardEvent::EmployeeAdded {
            employee_id: employee.id,
        });
        Ok(employee)
    }

    pub fn delete_employee(&mut self, id: i64) -> BoardResult<Employee> {
        let removed = RosterStore::new(&mut self.state).delete_employee(id)?;
        self.commit(BoardEvent::EmployeeDeleted { employee_id: id });
        Ok(removed)
    }

    pub fn find_employee(&self, id: i64) -> Option<&Employee> {
        self.roster().find_employee(id)
    }

    pub fn list_unassigned(&self) -> Vec<&Employee> {
        self.roster().list_unassigned()
    }

    // ========== Assignment operations ==========

    pub fn assign(&mut self, employee_id: i64, zone: ZoneId) -> BoardResult<AssignOutcome> {
        let outcome = AssignmentEngine::new(&mut self.state, &self.rules).assign(employee_id, zone)?;
        if let AssignOutcome::Assigned { from } = outcome {
            self.commit(BoardEvent::Assigned {
                employee_id,
                from,
                to: zone,
            });
        }
        Ok(outcome)
    }

    /// [`Self::assign`] with a zone name; unknown names fail as not found
    pub fn assign_by_name(&mut self, employee_id: i64, zone: &str) -> BoardResult<AssignOutcome> {
        let zone = parse_zone(zone)?;
        self.assign(employee_id, zone)
    }

    pub fn unassign(&mut self, employee_id: i64) -> BoardResult<Option<ZoneId>> {
        let left = AssignmentEngine::new(&mut self.state, &self.rules).unassign(employee_id)?;
        if let Some(from) = left {
            self.commit(BoardEvent::Unassigned { employee_id, from });
        }
        Ok(left)
    }

    pub fn list_eligible(&self, zone: ZoneId) -> Vec<&Employee> {
        self.assignments().list_eligible(zone)
    }

    pub fn list_eligible_by_name(&self, zone: &str) -> BoardResult<Vec<&Employee>> {
        let zone = parse_zone(zone)?;
        Ok(self.list_eligible(zone))
    }

    pub fn occupants(&self, zone: ZoneId) -> BoardResult<Vec<&Employee>> {
        self.assignments().occupants(zone)
    }

    pub fn occupancy(&self, zone: ZoneId) -> BoardResult<Occupancy> {
        self.assignments().occupancy(zone)
    }

    /// Every zone with its occupancy and admitted roles, in board order
    pub fn zones(&self) -> Vec<ZoneSummary> {
        self.state
            .zones
            .iter()
            .map(|(&id, zone)| ZoneSummary {
                id,
                name: zone.name.clone(),
                occupancy: zone.occupancy(),
                allowed_roles: self
                    .rules
                    .access(id)
                    .is_restricted()
                    .then(|| self.rules.allowed_roles(id)),
            })
            .collect()
    }

    // ========== Maintenance ==========

    pub fn check_consistency(&self) -> Vec<Inconsistency> {
        self.state.check_consistency()
    }

    /// Drop the stored board and start over from `fresh`
    pub fn reset(&mut self, fresh: BoardState) -> BoardResult<()> {
        self.gateway.clear()?;
        self.state = fresh;
        tracing::info!("Board reset");
        self.broadcast(BoardEvent::Reset);
        Ok(())
    }

    // ========== Commit ==========

    fn commit(&self, event: BoardEvent) {
        self.persist();
        self.broadcast(event);
    }

    /// Save the board; a failed write keeps the in-memory state
    fn persist(&self) {
        if let Err(e) = self.gateway.save(&self.state) {
            tracing::error!(
                error = %e,
                error_code = ?e.error_code(),
                "Failed to persist board, keeping in-memory state"
            );
        }
    }

    fn broadcast(&self, event: BoardEvent) {
        tracing::debug!(%event, "Board changed");
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
