//! Core - configuration, the board session and error definitions
//!
//! - [`Config`] - board configuration
//! - [`BoardSession`] - owns the board state and drives every operation
//! - [`BoardError`] - board operation errors

pub mod config;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::{BoardError, BoardResult, ErrorKind};
pub use session::{BoardSession, ZoneSummary};
