//! Citizen applications to join the volunteer pool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::InvalidTransition;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VolunteerApplication {
    pub application_id: i64,
    pub user_id: i64,
    pub description: String,
    pub status: ApplicationStatus,
    pub application_date: DateTime<Utc>,
}

/// Application joined with the applicant's contact details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VolunteerApplicationView {
    pub application_id: i64,
    pub user_id: i64,
    pub description: String,
    pub status: ApplicationStatus,
    pub application_date: DateTime<Utc>,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

text_enum!(ApplicationStatus {
    Pending => "PENDING",
    Approved => "APPROVED",
    Rejected => "REJECTED",
});

impl ApplicationStatus {
    pub fn review(self, decision: ApplicationStatus) -> Result<ApplicationStatus, InvalidTransition> {
        if self == ApplicationStatus::Pending && decision != ApplicationStatus::Pending {
            Ok(decision)
        } else {
            Err(InvalidTransition {
                entity: "volunteer application",
                from: self.as_str(),
                to: decision.as_str(),
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplicationPayload {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: String,
}
