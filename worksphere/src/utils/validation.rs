//! Input validation helpers
//!
//! Text length limits for roster fields and the checks that enforce them.

use crate::core::BoardError;

// ── Text length limits ──────────────────────────────────────────────

/// Employee display names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Photo URLs / paths
pub const MAX_URL_LEN: usize = 2048;

/// Single experience / skill entry
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string, once trimmed, is within the length limit.
///
/// Counts characters, not bytes.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), BoardError> {
    let len = value.trim().chars().count();
    if len > max_len {
        return Err(BoardError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), BoardError> {
    if value.trim().is_empty() {
        return Err(BoardError::validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), BoardError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}
