//! Citizen requests for assistance that administrators turn into volunteer tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::InvalidTransition;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TaskRequest {
    pub request_id: i64,
    pub user_id: i64,
    pub request_title: String,
    pub request_description: String,
    pub location: String,
    pub photo: Option<String>,
    pub status: TaskRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum TaskRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

text_enum!(TaskRequestStatus {
    Pending => "PENDING",
    Approved => "APPROVED",
    Rejected => "REJECTED",
});

impl TaskRequestStatus {
    /// Only pending requests can be reviewed.
    pub fn review(self, decision: TaskRequestStatus) -> Result<TaskRequestStatus, InvalidTransition> {
        match (self, decision) {
            (TaskRequestStatus::Pending, TaskRequestStatus::Approved)
            | (TaskRequestStatus::Pending, TaskRequestStatus::Rejected) => Ok(decision),
            _ => Err(InvalidTransition {
                entity: "task request",
                from: self.as_str(),
                to: decision.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub request_title: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Description must be between 1 and 1000 characters"
    ))]
    pub request_description: String,
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl CreateTaskRequest {
    /// Blank photo paths are treated as absent.
    pub fn normalized_photo(&self) -> Option<String> {
        self.photo
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_requests_can_be_approved_or_rejected() {
        assert_eq!(
            TaskRequestStatus::Pending.review(TaskRequestStatus::Approved),
            Ok(TaskRequestStatus::Approved)
        );
        assert_eq!(
            TaskRequestStatus::Pending.review(TaskRequestStatus::Rejected),
            Ok(TaskRequestStatus::Rejected)
        );
    }

    #[test]
    fn reviewed_requests_cannot_be_reviewed_again() {
        let err = TaskRequestStatus::Approved
            .review(TaskRequestStatus::Rejected)
            .unwrap_err();
        assert_eq!(err.from, "APPROVED");
        assert_eq!(err.to, "REJECTED");
        assert!(TaskRequestStatus::Pending
            .review(TaskRequestStatus::Pending)
            .is_err());
    }

    #[test]
    fn description_over_limit_fails_validation() {
        let payload = CreateTaskRequest {
            request_title: "Need water".into(),
            request_description: "x".repeat(1001),
            location: "Ward 4".into(),
            photo: None,
        };
        assert!(payload
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("request_description"));
    }

    #[test]
    fn blank_photo_is_normalized_away() {
        let payload = CreateTaskRequest {
            request_title: "t".into(),
            request_description: "d".into(),
            location: "l".into(),
            photo: Some("   ".into()),
        };
        assert_eq!(payload.normalized_photo(), None);
    }
}
