//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, notes, descriptions
//! - SQLite TEXT has no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: vendor, event type, color, flower, arrangement, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, messages (inquiry message, design notes, etc.)
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: phone, slug, hex codes, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}
