//! Input validation helpers
//!
//! Text length limits shared by the services. Values are trimmed before
//! they are stored.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names: products, dishes, clients, staff, functions
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: apartment numbers, blocks, phones
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free text: laundry items, cash descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Internal message bodies
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Trimmed, non-empty and within the length limit
pub fn required_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    check_length(trimmed, field, max_len)?;
    Ok(trimmed.to_string())
}

/// Length check only; empty is allowed
pub fn check_length(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field)
        .with_detail("max_len", max_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text("  Tajine ", "name", MAX_NAME_LEN).unwrap(), "Tajine");
    }

    #[test]
    fn blank_is_a_missing_field() {
        let err = required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn length_counts_characters() {
        // 100 accented chars are 200 bytes
        let value = "é".repeat(MAX_SHORT_TEXT_LEN);
        assert!(check_length(&value, "number", MAX_SHORT_TEXT_LEN).is_ok());

        let err = check_length(&format!("{value}x"), "number", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
