use crate::api::ApiError;
use crate::utils::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Returns the trimmed token and the new password ready to submit.
    pub fn validate(&self) -> Result<(String, String), ApiError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ApiError::validation("Invalid token"));
        }
        validation::new_password(&self.password, &self.confirm_password)?;
        Ok((token.to_string(), self.password.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(token: &str, password: &str, confirm: &str) -> ResetPasswordForm {
        ResetPasswordForm {
            token: token.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = form("  ", "NewPass123", "NewPass123").validate().unwrap_err();
        assert_eq!(err.error, "Invalid token");
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let err = form("tok", "NewPass123", "NewPass124").validate().unwrap_err();
        assert_eq!(err.error, "Passwords do not match");
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(form("tok", "short", "short").validate().is_err());
    }

    #[test]
    fn valid_form_trims_token_only() {
        let (token, password) = form("  tok-123 ", "NewPass123", "NewPass123")
            .validate()
            .unwrap();
        assert_eq!(token, "tok-123");
        assert_eq!(password, "NewPass123");
    }
}
