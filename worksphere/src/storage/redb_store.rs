//! redb-backed board storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `app_state` | `&str` | JSON bytes | Board blob under [`STATE_KEY`] |
//!
//! redb commits are durable once `commit()` returns, so a crash between
//! mutations leaves the previous board intact.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::BoardState;
use std::path::Path;
use std::sync::Arc;

use super::{StateGateway, StorageResult};

/// Table holding the board blob
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("app_state");

/// Key of the board blob
pub const STATE_KEY: &str = "workSphereData";

/// Database file name inside the work directory
pub const DB_FILE_NAME: &str = "worksphere.redb";

/// Board gateway backed by redb
#[derive(Clone)]
pub struct RedbGateway {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbGateway").finish_non_exhaustive()
    }
}

impl RedbGateway {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open `worksphere.redb` inside a work directory
    pub fn open_in_dir(work_dir: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open(work_dir.as_ref().join(DB_FILE_NAME))
    }

    /// Open an in-memory database (tests, throwaway boards)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Raw blob bytes, if any
    fn read_blob(&self) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;
        Ok(table.get(STATE_KEY)?.map(|guard| guard.value().to_vec()))
    }

    fn write_blob(&self, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(STATE_KEY, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl StateGateway for RedbGateway {
    fn load(&self) -> Option<BoardState> {
        let bytes = match self.read_blob() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!("No stored board found");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored board, treating as absent");
                return None;
            }
        };

        match serde_json::from_slice::<BoardState>(&bytes) {
            Ok(state) => {
                tracing::info!(
                    employees = state.staff.len(),
                    zones = state.zones.len(),
                    "Board loaded from storage"
                );
                Some(state)
            }
            Err(e) => {
                tracing::warn!(error = %e, bytes = bytes.len(), "Stored board is malformed, treating as absent");
                None
            }
        }
    }

    fn save(&self, state: &BoardState) -> StorageResult<()> {
        let bytes = serde_json::to_vec(state)?;
        self.write_blob(&bytes)?;
        tracing::debug!(bytes = bytes.len(), "Board saved to storage");
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.remove(STATE_KEY)?;
        }
        write_txn.commit()?;
        tracing::info!("Stored board cleared");
        Ok(())
    }
}
