use crate::api::{ApiError, CreateTaskRequest};
use crate::utils::validation::{self, MAX_REQUEST_DESCRIPTION_LEN};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRequestForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub photo: String,
}

impl TaskRequestForm {
    pub fn validate(&self) -> Result<CreateTaskRequest, ApiError> {
        validation::require(&self.title, "Request title")?;
        validation::require(&self.description, "Description")?;
        validation::max_chars(
            self.description.trim(),
            MAX_REQUEST_DESCRIPTION_LEN,
            "Description",
        )?;
        validation::require(&self.location, "Location")?;
        let photo = self.photo.trim();
        Ok(CreateTaskRequest {
            request_title: self.title.trim().to_string(),
            request_description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            photo: (!photo.is_empty()).then(|| photo.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TaskRequestForm {
        TaskRequestForm {
            title: "Medical help".into(),
            description: "Elderly person needs insulin".into(),
            location: "Aluva".into(),
            photo: "  ".into(),
        }
    }

    #[test]
    fn blank_photo_is_omitted() {
        let payload = form().validate().unwrap();
        assert_eq!(payload.photo, None);
        assert_eq!(payload.request_title, "Medical help");
    }

    #[test]
    fn description_is_bounded() {
        let long = TaskRequestForm {
            description: "d".repeat(MAX_REQUEST_DESCRIPTION_LEN + 1),
            ..form()
        };
        assert!(long.validate().is_err());
        let exact = TaskRequestForm {
            description: "d".repeat(MAX_REQUEST_DESCRIPTION_LEN),
            ..form()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn every_required_field_is_checked() {
        for blank in [
            TaskRequestForm { title: " ".into(), ..form() },
            TaskRequestForm { description: String::new(), ..form() },
            TaskRequestForm { location: String::new(), ..form() },
        ] {
            assert_eq!(blank.validate().unwrap_err().code, "VALIDATION_ERROR");
        }
    }
}
