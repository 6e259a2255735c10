//! Client-side checks mirrored from the API's payload validation, so forms can
//! fail fast before a round trip.

use crate::api::ApiError;
use crate::utils::text::{char_count, is_blank};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_REMARKS_LEN: usize = 1000;
pub const MAX_REQUEST_DESCRIPTION_LEN: usize = 1000;
pub const MAX_APPLICATION_DESCRIPTION_LEN: usize = 500;

pub fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if is_blank(value) {
        Err(ApiError::validation(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

pub fn max_chars(value: &str, max: usize, field: &str) -> Result<(), ApiError> {
    if char_count(value) > max {
        Err(ApiError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ApiError> {
    require(value, "Email")?;
    if value.contains('@') {
        Ok(())
    } else {
        Err(ApiError::validation("Please enter a valid email address"))
    }
}

pub fn new_password(password: &str, confirmation: &str) -> Result<(), ApiError> {
    if char_count(password) < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if password != confirmation {
        return Err(ApiError::validation("Passwords do not match"));
    }
    Ok(())
}

/// Remarks must be non-blank and at most [`MAX_REMARKS_LEN`] characters once trimmed.
pub fn remarks(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Remarks cannot be empty"));
    }
    max_chars(trimmed, MAX_REMARKS_LEN, "Remarks")?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_an_at_sign() {
        assert!(email("asha@example.com").is_ok());
        assert_eq!(
            email("asha.example.com").unwrap_err().error,
            "Please enter a valid email address"
        );
        assert_eq!(email("  ").unwrap_err().error, "Email is required");
    }

    #[test]
    fn new_password_checks_length_then_confirmation() {
        assert!(new_password("short", "short").is_err());
        assert_eq!(
            new_password("longenough", "different").unwrap_err().error,
            "Passwords do not match"
        );
        assert!(new_password("longenough", "longenough").is_ok());
    }

    #[test]
    fn remarks_are_trimmed_and_bounded() {
        assert_eq!(remarks("  road cleared ").unwrap(), "road cleared");
        assert!(remarks("   ").is_err());
        assert!(remarks(&"x".repeat(MAX_REMARKS_LEN)).is_ok());
        assert!(remarks(&"x".repeat(MAX_REMARKS_LEN + 1)).is_err());
    }

    #[test]
    fn max_chars_reports_field_name() {
        let err = max_chars(&"a".repeat(501), 500, "Description").unwrap_err();
        assert_eq!(err.error, "Description must be at most 500 characters");
    }
}
