//! Scheduled announcements targeted at one role or at everyone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub target_role: NotificationTarget,
    pub scheduled_for: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum NotificationTarget {
    User,
    Volunteer,
    Admin,
    #[default]
    All,
}

text_enum!(NotificationTarget {
    User => "User",
    Volunteer => "Volunteer",
    Admin => "Admin",
    All => "All",
});

impl From<UserRole> for NotificationTarget {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => NotificationTarget::User,
            UserRole::Volunteer => NotificationTarget::Volunteer,
            UserRole::Admin => NotificationTarget::Admin,
        }
    }
}

impl Notification {
    /// Mirrors the feed query: active, aimed at `role` or everyone, and due.
    pub fn is_visible_to(&self, role: UserRole, now: DateTime<Utc>) -> bool {
        self.active
            && (self.target_role == NotificationTarget::All
                || self.target_role == NotificationTarget::from(role))
            && self.scheduled_for <= now
    }
}

fn default_notification_type() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload used to create a notification and to replace an existing one.
pub struct NotificationPayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 2000, message = "Message is required"))]
    pub message: String,
    #[serde(default = "default_notification_type")]
    #[validate(length(min = 1, max = 50))]
    pub notification_type: String,
    #[serde(default)]
    pub target_role: NotificationTarget,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}
