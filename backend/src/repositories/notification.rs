//! Notification repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::notification::{Notification, NotificationPayload, NotificationTarget};

const TABLE_NAME: &str = "notifications";
const SELECT_COLUMNS: &str =
    "id, title, message, notification_type, target_role, scheduled_for, created_at, active";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        payload: &NotificationPayload,
        scheduled_for: DateTime<Utc>,
    ) -> Result<Notification, AppError>;

    /// Every notification, inactive ones included.
    async fn find_all(&self, db: &PgPool) -> Result<Vec<Notification>, AppError>;

    /// Active notifications for `target` or `All` that are due at `now`.
    async fn find_feed(
        &self,
        db: &PgPool,
        target: NotificationTarget,
        now: DateTime<Utc>,
    ) -> Result<Vec<Notification>, AppError>;

    async fn update(
        &self,
        db: &PgPool,
        id: i64,
        payload: &NotificationPayload,
    ) -> Result<Option<Notification>, AppError>;

    /// Soft delete: clears the `active` flag.
    async fn deactivate(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NotificationRepository;

impl NotificationRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(
        &self,
        db: &PgPool,
        payload: &NotificationPayload,
        scheduled_for: DateTime<Utc>,
    ) -> Result<Notification, AppError> {
        let query = format!(
            "INSERT INTO {} (title, message, notification_type, target_role, scheduled_for, active) \
             VALUES ($1, $2, $3, $4, $5, TRUE) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Notification>(&query)
            .bind(payload.title.trim())
            .bind(payload.message.trim())
            .bind(payload.notification_type.trim())
            .bind(payload.target_role.as_str())
            .bind(scheduled_for)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn find_all(&self, db: &PgPool) -> Result<Vec<Notification>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY scheduled_for DESC, id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Notification>(&query)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_feed(
        &self,
        db: &PgPool,
        target: NotificationTarget,
        now: DateTime<Utc>,
    ) -> Result<Vec<Notification>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE active AND target_role IN ($1, $2) AND scheduled_for <= $3 \
             ORDER BY scheduled_for DESC, id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Notification>(&query)
            .bind(target.as_str())
            .bind(NotificationTarget::All.as_str())
            .bind(now)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn update(
        &self,
        db: &PgPool,
        id: i64,
        payload: &NotificationPayload,
    ) -> Result<Option<Notification>, AppError> {
        let query = format!(
            "UPDATE {} SET title = $2, message = $3, notification_type = $4, target_role = $5, \
             scheduled_for = COALESCE($6, scheduled_for) WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(payload.title.trim())
            .bind(payload.message.trim())
            .bind(payload.notification_type.trim())
            .bind(payload.target_role.as_str())
            .bind(payload.scheduled_for)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn deactivate(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("UPDATE {} SET active = FALSE WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}
