//! Contact-form feedback repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::feedback::{CreateFeedback, Feedback, FeedbackStatus};

const TABLE_NAME: &str = "feedback";
const SELECT_COLUMNS: &str = "id, name, email, subject, message, status, created_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepositoryTrait: Send + Sync {
    async fn create(&self, db: &PgPool, payload: &CreateFeedback) -> Result<Feedback, AppError>;

    async fn find_all(&self, db: &PgPool) -> Result<Vec<Feedback>, AppError>;

    async fn update_status(
        &self,
        db: &PgPool,
        id: i64,
        status: FeedbackStatus,
    ) -> Result<Option<Feedback>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackRepository;

impl FeedbackRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FeedbackRepositoryTrait for FeedbackRepository {
    async fn create(&self, db: &PgPool, payload: &CreateFeedback) -> Result<Feedback, AppError> {
        let query = format!(
            "INSERT INTO {} (name, email, subject, message, status) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Feedback>(&query)
            .bind(payload.name.trim())
            .bind(payload.email.trim())
            .bind(payload.subject.trim())
            .bind(payload.message.trim())
            .bind(FeedbackStatus::Unread.as_str())
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn find_all(&self, db: &PgPool) -> Result<Vec<Feedback>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Feedback>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    async fn update_status(
        &self,
        db: &PgPool,
        id: i64,
        status: FeedbackStatus,
    ) -> Result<Option<Feedback>, AppError> {
        let query = format!(
            "UPDATE {} SET status = $2 WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }
}
