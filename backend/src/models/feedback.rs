//! Messages sent through the public contact form and triaged by administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[schema(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Unread,
    Read,
    Flagged,
}

text_enum!(FeedbackStatus {
    Unread => "unread",
    Read => "read",
    Flagged => "flagged",
});

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeedback {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 4000, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackStatusPayload {
    pub status: FeedbackStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_requires_email_and_message() {
        let payload = CreateFeedback {
            name: "Ravi".into(),
            email: "ravi".into(),
            subject: String::new(),
            message: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("message"));
    }
}
