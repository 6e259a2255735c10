//! Scheduled notifications and the per-role feed.

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        notification::{Notification, NotificationPayload, NotificationTarget},
        user::{User, UserRole},
    },
    repositories::notification::NotificationRepositoryTrait,
};

pub async fn create(
    repo: &dyn NotificationRepositoryTrait,
    db: &PgPool,
    payload: NotificationPayload,
) -> Result<Notification, AppError> {
    payload.validate()?;
    let scheduled_for = payload.scheduled_for.unwrap_or_else(Utc::now);
    let notification = repo.create(db, &payload, scheduled_for).await?;
    tracing::info!(
        notification_id = notification.id,
        target_role = %notification.target_role,
        scheduled_for = %notification.scheduled_for,
        "Notification scheduled"
    );
    Ok(notification)
}

/// Feed for `raw_role`. Non-admins may only read the feed of their own role.
pub async fn feed_for_role(
    repo: &dyn NotificationRepositoryTrait,
    db: &PgPool,
    actor: &User,
    raw_role: &str,
) -> Result<Vec<Notification>, AppError> {
    let role: UserRole = raw_role.parse()?;
    if !actor.is_admin() && role != actor.role {
        return Err(AppError::Forbidden(
            "Cannot read notifications for another role".into(),
        ));
    }
    repo.find_feed(db, NotificationTarget::from(role), Utc::now())
        .await
}

pub async fn update(
    repo: &dyn NotificationRepositoryTrait,
    db: &PgPool,
    id: i64,
    payload: NotificationPayload,
) -> Result<Notification, AppError> {
    payload.validate()?;
    repo.update(db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".into()))
}

pub async fn deactivate(
    repo: &dyn NotificationRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<(), AppError> {
    if repo.deactivate(db, id).await? {
        tracing::info!(notification_id = id, "Notification deactivated");
        Ok(())
    } else {
        Err(AppError::NotFound("Notification not found".into()))
    }
}
