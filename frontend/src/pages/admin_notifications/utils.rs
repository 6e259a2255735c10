use crate::api::{ApiError, Notification, NotificationPayload, NOTIFICATION_TARGETS, NOTIFICATION_TYPES};
use crate::utils::{
    time::{parse_datetime_local_input, to_datetime_local_input},
    validation,
};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationForm {
    /// Set while editing an existing notification.
    pub editing: Option<i64>,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub target_role: String,
    /// Raw `datetime-local` value; blank means "now".
    pub scheduled_for: String,
}

impl Default for NotificationForm {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            message: String::new(),
            notification_type: NOTIFICATION_TYPES[2].to_string(),
            target_role: NOTIFICATION_TARGETS[0].to_string(),
            scheduled_for: String::new(),
        }
    }
}

impl From<&Notification> for NotificationForm {
    fn from(n: &Notification) -> Self {
        Self {
            editing: Some(n.id),
            title: n.title.clone(),
            message: n.message.clone(),
            notification_type: n.notification_type.clone(),
            target_role: n.target_role.clone(),
            scheduled_for: to_datetime_local_input(&n.scheduled_for),
        }
    }
}

impl NotificationForm {
    pub fn validate(&self) -> Result<NotificationPayload, ApiError> {
        validation::require(&self.title, "Title")?;
        validation::max_chars(self.title.trim(), MAX_TITLE_LEN, "Title")?;
        validation::require(&self.message, "Message")?;
        validation::max_chars(self.message.trim(), MAX_MESSAGE_LEN, "Message")?;
        if !NOTIFICATION_TYPES.contains(&self.notification_type.as_str()) {
            return Err(ApiError::validation("Please choose a notification type"));
        }
        if !NOTIFICATION_TARGETS.contains(&self.target_role.as_str()) {
            return Err(ApiError::validation("Please choose an audience"));
        }
        let scheduled_for = if self.scheduled_for.trim().is_empty() {
            None
        } else {
            Some(
                parse_datetime_local_input(&self.scheduled_for)
                    .ok_or_else(|| ApiError::validation("Scheduled time is not a valid date"))?,
            )
        };
        Ok(NotificationPayload {
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
            notification_type: self.notification_type.clone(),
            target_role: self.target_role.clone(),
            scheduled_for,
        })
    }
}

/// Active notifications first, then newest schedule first within each group.
pub fn admin_order(mut notifications: Vec<Notification>) -> Vec<Notification> {
    notifications.sort_by(|a, b| {
        b.active
            .cmp(&a.active)
            .then(b.scheduled_for.cmp(&a.scheduled_for))
    });
    notifications
}
