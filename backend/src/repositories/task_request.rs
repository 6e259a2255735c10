//! Task request repository.
//!
//! Approval is the only multi-row operation here: the request flips to
//! APPROVED and its task is inserted inside one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::task::{Task, DEFAULT_TASK_PHOTO};
use crate::models::task_request::{CreateTaskRequest, TaskRequest, TaskRequestStatus};
use crate::repositories::task::SELECT_COLUMNS as TASK_COLUMNS;
use crate::repositories::transaction::{begin_transaction, commit_transaction, rollback_transaction};

const TABLE_NAME: &str = "task_requests";
const SELECT_COLUMNS: &str = "request_id, user_id, request_title, request_description, location, \
     photo, status, created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRequestRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        payload: &CreateTaskRequest,
    ) -> Result<TaskRequest, AppError>;

    /// Newest first, optionally restricted to one status.
    async fn find_all(
        &self,
        db: &PgPool,
        status: Option<TaskRequestStatus>,
    ) -> Result<Vec<TaskRequest>, AppError>;

    async fn find_by_user(&self, db: &PgPool, user_id: i64) -> Result<Vec<TaskRequest>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<TaskRequest>, AppError>;

    /// Marks a PENDING request approved and creates its task. Returns `None`
    /// when the request was no longer pending.
    async fn approve(
        &self,
        db: &PgPool,
        id: i64,
        deadline: DateTime<Utc>,
    ) -> Result<Option<Task>, AppError>;

    /// Marks a PENDING request rejected. Returns `None` when it was no longer pending.
    async fn reject(&self, db: &PgPool, id: i64) -> Result<Option<TaskRequest>, AppError>;

    /// Deletes the request; its task is removed by the cascade.
    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskRequestRepository;

impl TaskRequestRepository {
    pub fn new() -> Self {
        Self
    }
}

fn task_photo(request: &TaskRequest) -> String {
    request
        .photo
        .as_deref()
        .map(str::trim)
        .filter(|photo| !photo.is_empty())
        .unwrap_or(DEFAULT_TASK_PHOTO)
        .to_string()
}

#[async_trait]
impl TaskRequestRepositoryTrait for TaskRequestRepository {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        payload: &CreateTaskRequest,
    ) -> Result<TaskRequest, AppError> {
        let query = format!(
            "INSERT INTO {} (user_id, request_title, request_description, location, photo, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, TaskRequest>(&query)
            .bind(user_id)
            .bind(payload.request_title.trim())
            .bind(payload.request_description.trim())
            .bind(payload.location.trim())
            .bind(payload.normalized_photo())
            .bind(TaskRequestStatus::Pending.as_str())
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn find_all(
        &self,
        db: &PgPool,
        status: Option<TaskRequestStatus>,
    ) -> Result<Vec<TaskRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, request_id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, TaskRequest>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_by_user(&self, db: &PgPool, user_id: i64) -> Result<Vec<TaskRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY created_at DESC, request_id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, TaskRequest>(&query)
            .bind(user_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<TaskRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE request_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, TaskRequest>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn approve(
        &self,
        db: &PgPool,
        id: i64,
        deadline: DateTime<Utc>,
    ) -> Result<Option<Task>, AppError> {
        let mut tx = begin_transaction(db).await?;

        let update = format!(
            "UPDATE {} SET status = $2, updated_at = NOW() \
             WHERE request_id = $1 AND status = $3 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let approved = sqlx::query_as::<_, TaskRequest>(&update)
            .bind(id)
            .bind(TaskRequestStatus::Approved.as_str())
            .bind(TaskRequestStatus::Pending.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(request) = approved else {
            rollback_transaction(tx).await?;
            return Ok(None);
        };

        let insert = format!(
            "INSERT INTO tasks (request_id, photo, status, deadline) \
             VALUES ($1, $2, 'PENDING', $3) RETURNING {}",
            TASK_COLUMNS
        );
        let task = sqlx::query_as::<_, Task>(&insert)
            .bind(request.request_id)
            .bind(task_photo(&request))
            .bind(deadline)
            .fetch_one(&mut *tx)
            .await?;

        commit_transaction(tx).await?;
        Ok(Some(task))
    }

    async fn reject(&self, db: &PgPool, id: i64) -> Result<Option<TaskRequest>, AppError> {
        let query = format!(
            "UPDATE {} SET status = $2, updated_at = NOW() \
             WHERE request_id = $1 AND status = $3 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, TaskRequest>(&query)
            .bind(id)
            .bind(TaskRequestStatus::Rejected.as_str())
            .bind(TaskRequestStatus::Pending.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE request_id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(photo: Option<&str>) -> TaskRequest {
        TaskRequest {
            request_id: 1,
            user_id: 2,
            request_title: "Roof collapsed".into(),
            request_description: "Family needs shelter".into(),
            location: "Ward 9".into(),
            photo: photo.map(str::to_string),
            status: TaskRequestStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn task_photo_falls_back_to_default() {
        assert_eq!(task_photo(&request(None)), DEFAULT_TASK_PHOTO);
        assert_eq!(task_photo(&request(Some("  "))), DEFAULT_TASK_PHOTO);
        assert_eq!(task_photo(&request(Some("uploads/roof.jpg"))), "uploads/roof.jpg");
    }
}
