use shared::error::{AppError, ErrorCode};
use shared::models::{Role, ZoneId};
use thiserror::Error;

use crate::storage::StorageError;

/// Board operation errors
///
/// Every variant is a local, recoverable failure. The front end turns it
/// into a user-visible message, usually via [`AppError`].
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Role {role} is not allowed in zone {zone} (employee {employee_id})")]
    NotEligible {
        employee_id: i64,
        role: Role,
        zone: ZoneId,
    },

    #[error("Zone {zone} is full ({capacity}/{capacity})")]
    ZoneFull { zone: ZoneId, capacity: u32 },

    #[error("Employee {employee_id} is still assigned to zone {zone}")]
    StillAssigned { employee_id: i64, zone: ZoneId },

    #[error("Employee ids exhausted (highest id is {max_id})")]
    IdsExhausted { max_id: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Coarse failure kind, for callers that only branch on the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Eligibility,
    Capacity,
    Precondition,
    Storage,
}

impl BoardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::Validation(_) | BoardError::RoleNotFound(_) => ErrorKind::Validation,
            BoardError::EmployeeNotFound(_) | BoardError::ZoneNotFound(_) => ErrorKind::NotFound,
            BoardError::NotEligible { .. } => ErrorKind::Eligibility,
            BoardError::ZoneFull { .. } => ErrorKind::Capacity,
            BoardError::StillAssigned { .. } | BoardError::IdsExhausted { .. } => {
                ErrorKind::Precondition
            }
            BoardError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        let message = err.to_string();
        match err {
            BoardError::Validation(_) => AppError::with_message(ErrorCode::ValidationFailed, message),
            BoardError::EmployeeNotFound(id) => {
                AppError::with_message(ErrorCode::EmployeeNotFound, message)
                    .with_detail("employee_id", id)
            }
            BoardError::ZoneNotFound(zone) => {
                AppError::with_message(ErrorCode::ZoneNotFound, message).with_detail("zone", zone)
            }
            BoardError::RoleNotFound(role) => {
                AppError::with_message(ErrorCode::RoleNotFound, message).with_detail("role", role)
            }
            BoardError::NotEligible {
                employee_id,
                role,
                zone,
            } => AppError::with_message(ErrorCode::ZoneRoleNotAllowed, message)
                .with_detail("employee_id", employee_id)
                .with_detail("role", role.as_str())
                .with_detail("zone", zone.as_str()),
            BoardError::ZoneFull { zone, capacity } => {
                AppError::with_message(ErrorCode::ZoneFull, message)
                    .with_detail("zone", zone.as_str())
                    .with_detail("capacity", capacity)
            }
            BoardError::StillAssigned { employee_id, zone } => {
                AppError::with_message(ErrorCode::EmployeeStillAssigned, message)
                    .with_detail("employee_id", employee_id)
                    .with_detail("zone", zone.as_str())
            }
            BoardError::IdsExhausted { max_id } => {
                AppError::with_message(ErrorCode::EmployeeIdsExhausted, message)
                    .with_detail("max_id", max_id)
            }
            BoardError::Storage(e) => {
                let code = e.error_code();
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                AppError::with_message(code, message)
            }
        }
    }
}

/// Result alias for board operations
pub type BoardResult<T> = std::result::Result<T, BoardError>;
