//! WorkSphere - staff-to-zone assignment board
//!
//! # Overview
//!
//! A floor plan of six zones, each with a capacity and a role policy, plus
//! a roster of employees who sit in at most one zone at a time.
//!
//! - **Roster** (`roster`): add, delete and look up employees
//! - **Assignment** (`assignment`): eligibility rules, capacity, moves
//! - **Storage** (`storage`): the board as one JSON blob in redb
//! - **Session** (`core::session`): owns the board, persists and notifies
//!
//! # Layout
//!
//! ```text
//! worksphere/src/
//! ├── core/          # config, session, errors
//! ├── roster/        # employee store
//! ├── assignment/    # eligibility table, assignment engine
//! ├── storage/       # state gateway, redb backend
//! └── utils/         # logging, validation
//! ```

pub mod assignment;
pub mod core;
pub mod roster;
pub mod storage;
pub mod utils;

pub use assignment::{AssignOutcome, EligibilityTable, ZoneAccess};
pub use crate::core::{BoardError, BoardResult, BoardSession, Config, ErrorKind, ZoneSummary};
pub use roster::{Roster, RosterStore};
pub use storage::{RedbGateway, StateGateway, StorageError};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the config, create the work directory and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(
        &config.log_level,
        config.log_dir.as_deref(),
        config.is_production(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    eprintln!(
        r#"
 _      __         __   ____       __
| | /| / /__  ____/ /__/ __/__  / /  ___ _______
| |/ |/ / _ \/ __/  '_/\ \/ _ \/ _ \/ -_) __/ -_)
|__/|__/\___/_/ /_/\_\___/ .__/_//_/\__/_/  \__/
                        /_/
    "#
    );
}
