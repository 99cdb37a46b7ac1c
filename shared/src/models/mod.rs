//! Data models
//!
//! Shared between the board engine and any front end.
//! Employee ids are `i64`; zones and roles are closed enums.

pub mod board;
pub mod employee;
pub mod role;
pub mod zone;

// Re-exports
pub use board::*;
pub use employee::*;
pub use role::*;
pub use zone::*;
