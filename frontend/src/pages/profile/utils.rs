use crate::api::{ApiError, UpdateUser, UserResponse, UserRole};
use crate::utils::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
}

impl From<&UserResponse> for ProfileForm {
    fn from(user: &UserResponse) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            location: user.location.clone(),
        }
    }
}

impl ProfileForm {
    /// Builds an update carrying only the fields that differ from `current`.
    pub fn changes_from(&self, current: &UserResponse) -> Result<UpdateUser, ApiError> {
        validation::require(&self.name, "Name")?;
        validation::email(self.email.trim())?;

        fn changed(new: &str, old: &str) -> Option<String> {
            let new = new.trim();
            (new != old).then(|| new.to_string())
        }

        let update = UpdateUser {
            name: changed(&self.name, &current.name),
            email: changed(&self.email, &current.email),
            phone_number: changed(&self.phone_number, &current.phone_number),
            location: changed(&self.location, &current.location),
            ..UpdateUser::default()
        };
        if update == UpdateUser::default() {
            return Err(ApiError::validation("No changes to save"));
        }
        Ok(update)
    }
}

pub fn page_title(role: Option<UserRole>) -> &'static str {
    match role {
        Some(UserRole::Admin) => "Settings",
        Some(UserRole::Volunteer) => "Volunteer Profile",
        _ => "My Profile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user() -> UserResponse {
        UserResponse {
            user_id: 1,
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone_number: "9000000000".into(),
            location: "Palakkad".into(),
            role: UserRole::User,
            user_status: Default::default(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let current = user();
        let mut form = ProfileForm::from(&current);
        form.location = " Thrissur ".into();
        let update = form.changes_from(&current).unwrap();
        assert_eq!(update.location.as_deref(), Some("Thrissur"));
        assert!(update.name.is_none());
        assert!(update.email.is_none());
    }

    #[test]
    fn unchanged_form_is_rejected() {
        let current = user();
        let err = ProfileForm::from(&current).changes_from(&current).unwrap_err();
        assert_eq!(err.error, "No changes to save");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let current = user();
        let mut form = ProfileForm::from(&current);
        form.email = "asha".into();
        assert!(form.changes_from(&current).is_err());
    }

    #[test]
    fn titles_follow_role() {
        assert_eq!(page_title(Some(UserRole::Admin)), "Settings");
        assert_eq!(page_title(None), "My Profile");
    }
}
