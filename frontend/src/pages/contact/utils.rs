use crate::api::{ApiError, CreateFeedback};
use crate::state::session::Session;
use crate::utils::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Signed-in visitors get their name and email filled in.
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(s) => Self {
                name: s.name.clone(),
                email: s.email.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<CreateFeedback, ApiError> {
        validation::require(&self.name, "Name")?;
        validation::email(self.email.trim())?;
        validation::require(&self.message, "Message")?;
        Ok(CreateFeedback {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::helpers::session_for;

    #[test]
    fn session_prefills_identity() {
        let session = session_for(UserRole::User);
        let form = ContactForm::for_session(Some(&session));
        assert_eq!(form.email, session.email);
        assert!(form.message.is_empty());
        assert_eq!(ContactForm::for_session(None), ContactForm::default());
    }

    #[test]
    fn message_is_required() {
        let form = ContactForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            subject: String::new(),
            message: "  ".into(),
        };
        assert_eq!(form.validate().unwrap_err().error, "Message is required");
    }

    #[test]
    fn valid_form_is_trimmed() {
        let form = ContactForm {
            name: " Asha ".into(),
            email: "asha@example.com ".into(),
            subject: " Thanks ".into(),
            message: " Great work ".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Asha");
        assert_eq!(payload.subject, "Thanks");
        assert_eq!(payload.message, "Great work");
    }
}
