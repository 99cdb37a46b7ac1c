//! Board persistence
//!
//! The board is stored as one opaque JSON blob under a single fixed key.
//! [`StateGateway`] is the seam the session talks to; [`RedbGateway`] is
//! the on-disk implementation.

mod redb_store;

pub use redb_store::{RedbGateway, DB_FILE_NAME, STATE_KEY};

use shared::error::ErrorCode;
use shared::models::BoardState;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Map to a shared error code (front end localizes it)
    pub fn error_code(&self) -> ErrorCode {
        if let StorageError::Serialization(_) = self {
            return ErrorCode::InternalError;
        }

        // redb errors are classified by message
        let err_str = self.to_string().to_lowercase();
        if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
        {
            return ErrorCode::StorageFull;
        }
        if err_str.contains("corrupt") || err_str.contains("invalid database") {
            return ErrorCode::StorageCorrupted;
        }
        ErrorCode::DatabaseError
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Load/save interface for the board blob
pub trait StateGateway {
    /// Stored board, or `None` when nothing usable is stored.
    ///
    /// Unreadable or malformed blobs are reported as absent, never as errors.
    fn load(&self) -> Option<BoardState>;

    /// Replace the stored board
    fn save(&self, state: &BoardState) -> StorageResult<()>;

    /// Drop the stored board
    fn clear(&self) -> StorageResult<()>;
}
