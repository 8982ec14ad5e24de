//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Placement
//! fields are checked here before any storage access is attempted.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, category, section, subsection
pub const MAX_NAME_LEN: usize = 200;

/// Taglines, classifications
pub const MAX_SHORT_TEXT_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// External URLs (inline data-URIs are exempt; the storage capacity check
/// bounds those instead)
pub const MAX_URL_LEN: usize = 2048;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_whitespace_only() {
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Hytera HP788", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn optional_text_ignores_none() {
        assert!(validate_optional_text(&None, "tagline", MAX_SHORT_TEXT_LEN).is_ok());
        let long = Some("x".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&long, "tagline", MAX_SHORT_TEXT_LEN).is_err());
    }
}
