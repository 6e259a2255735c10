use crate::api::{ApiError, VolunteerApplication, STATUS_APPROVED, STATUS_PENDING};
use crate::utils::validation::{self, MAX_APPLICATION_DESCRIPTION_LEN};

pub fn validate_description(raw: &str) -> Result<String, ApiError> {
    validation::require(raw, "Description")?;
    let trimmed = raw.trim();
    validation::max_chars(trimmed, MAX_APPLICATION_DESCRIPTION_LEN, "Description")?;
    Ok(trimmed.to_string())
}

/// A new application is pointless while one is pending or already approved.
pub fn can_apply(applications: &[VolunteerApplication]) -> bool {
    !applications
        .iter()
        .any(|a| a.status == STATUS_PENDING || a.status == STATUS_APPROVED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn application(status: &str) -> VolunteerApplication {
        VolunteerApplication {
            application_id: 1,
            user_id: 1,
            description: "I can drive".into(),
            status: status.into(),
            application_date: Utc::now(),
        }
    }

    #[test]
    fn description_limit_is_500() {
        assert!(validate_description(&"a".repeat(500)).is_ok());
        assert!(validate_description(&"a".repeat(501)).is_err());
        assert!(validate_description("   ").is_err());
    }

    #[test]
    fn rejected_applicants_may_reapply() {
        assert!(can_apply(&[]));
        assert!(can_apply(&[application("REJECTED")]));
        assert!(!can_apply(&[application("REJECTED"), application("PENDING")]));
        assert!(!can_apply(&[application("APPROVED")]));
    }
}
