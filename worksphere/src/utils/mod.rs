//! Utilities - logging setup and input validation

pub mod logger;
pub mod validation;
