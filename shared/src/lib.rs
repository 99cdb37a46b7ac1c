//! Shared types for the WorkSphere board
//!
//! Domain models, board events, the unified error code system and
//! small utilities used by the engine crate and any front end.

pub mod error;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::BoardEvent;
pub use models::{BoardState, Employee, EmployeeCreate, Role, Zone, ZoneId};
