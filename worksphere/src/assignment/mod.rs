//! Assignment Engine - zone eligibility, capacity and moves

mod eligibility;
mod engine;

pub use eligibility::{EligibilityTable, ZoneAccess};
pub use engine::{AssignOutcome, AssignmentEngine, Assignments};
