//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Labels, titles, group names
pub const MAX_NAME_LEN: usize = 200;

/// Slugs
pub const MAX_SLUG_LEN: usize = 120;

/// Short descriptions, icons
pub const MAX_SHORT_TEXT_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum admin password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
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
        )));
    }
    Ok(())
}

/// Validate a section or project slug.
///
/// Slugs are free text as long as they contain no whitespace or control
/// characters. A leading `/` is allowed and kept as-is in menu urls.
pub fn validate_slug(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_SLUG_LEN)?;
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(AppError::validation(format!(
            "{field} must not contain whitespace"
        ))
        .with_detail("field", field));
    }
    Ok(())
}
