//! Volunteer tasks spawned from approved task requests.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::InvalidTransition;

/// Photo recorded on tasks whose originating request had none.
pub const DEFAULT_TASK_PHOTO: &str = "default_path.jpg";
/// Upper bound for a single remark entry.
pub const MAX_REMARK_LENGTH: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub task_id: i64,
    pub request_id: i64,
    pub volunteer_id: Option<i64>,
    pub photo: String,
    pub status: TaskStatus,
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

/// Task joined with the request it came from and the assigned volunteer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TaskDetail {
    pub task_id: i64,
    pub request_id: i64,
    pub volunteer_id: Option<i64>,
    pub volunteer_name: Option<String>,
    pub photo: String,
    pub status: TaskStatus,
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub request_title: String,
    pub request_description: String,
    pub location: String,
    pub requester_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

text_enum!(TaskStatus {
    Pending => "PENDING",
    InProgress => "IN_PROGRESS",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

impl TaskStatus {
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Pending, TaskStatus::InProgress)
                | (TaskStatus::Pending, TaskStatus::Cancelled)
                | (TaskStatus::InProgress, TaskStatus::Completed)
                | (TaskStatus::InProgress, TaskStatus::Cancelled)
        )
    }

    pub fn transition(self, next: TaskStatus) -> Result<TaskStatus, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                entity: "task",
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

impl Task {
    pub fn is_available(&self) -> bool {
        self.volunteer_id.is_none() && self.status == TaskStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemarksPayload {
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemarksResponse {
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
}

impl From<&Task> for RemarksResponse {
    fn from(task: &Task) -> Self {
        Self {
            volunteer_remarks: task.volunteer_remarks.clone(),
            admin_remarks: task.admin_remarks.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct AcceptTaskQuery {
    pub volunteer_id: i64,
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct TaskStatusQuery {
    pub status: String,
}

/// Returns the trimmed remark, or the reason it cannot be stored.
pub fn validate_remark(raw: &str) -> Result<&str, String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err("Remarks cannot be empty".to_string());
    }
    if text.chars().count() > MAX_REMARK_LENGTH {
        return Err(format!(
            "Remarks cannot exceed {} characters",
            MAX_REMARK_LENGTH
        ));
    }
    Ok(text)
}

/// Formats one remark log line as `yyyy-MM-dd HH:mm: text`.
pub fn remark_entry<Tz>(text: &str, at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}: {}", at.format("%Y-%m-%d %H:%M"), text)
}

/// Appends `entry` to the existing remark log, one entry per line.
pub fn append_remark(existing: Option<&str>, entry: &str) -> String {
    match existing.map(str::trim_end).filter(|log| !log.is_empty()) {
        Some(log) => format!("{}\n{}", log, entry),
        None => entry.to_string(),
    }
}
