//! Task repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::task::{append_remark, Task, TaskDetail, TaskStatus};
use crate::repositories::transaction::{begin_transaction, commit_transaction};

const TABLE_NAME: &str = "tasks";
pub(crate) const SELECT_COLUMNS: &str = "task_id, request_id, volunteer_id, photo, status, \
     volunteer_remarks, admin_remarks, created_at, deadline";
const DETAIL_SELECT: &str = "SELECT t.task_id, t.request_id, t.volunteer_id, v.name AS volunteer_name, \
     t.photo, t.status, t.volunteer_remarks, t.admin_remarks, t.created_at, t.deadline, \
     r.request_title, r.request_description, r.location, u.name AS requester_name \
     FROM tasks t \
     JOIN task_requests r ON r.request_id = t.request_id \
     JOIN users u ON u.user_id = r.user_id \
     LEFT JOIN users v ON v.user_id = t.volunteer_id";

/// Which of the two remark logs an entry goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkLog {
    Volunteer,
    Admin,
}

impl RemarkLog {
    fn column(self) -> &'static str {
        match self {
            RemarkLog::Volunteer => "volunteer_remarks",
            RemarkLog::Admin => "admin_remarks",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    async fn find_all_details(&self, db: &PgPool) -> Result<Vec<TaskDetail>, AppError>;

    /// PENDING tasks without a volunteer.
    async fn find_available(&self, db: &PgPool) -> Result<Vec<TaskDetail>, AppError>;

    async fn find_by_volunteer(
        &self,
        db: &PgPool,
        volunteer_id: i64,
    ) -> Result<Vec<TaskDetail>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Task>, AppError>;

    /// Claims an unassigned PENDING task and moves it to IN_PROGRESS.
    /// Returns `None` when another volunteer got there first.
    async fn assign_volunteer(
        &self,
        db: &PgPool,
        id: i64,
        volunteer_id: i64,
    ) -> Result<Option<Task>, AppError>;

    /// Compare-and-set on the status column.
    async fn update_status(
        &self,
        db: &PgPool,
        id: i64,
        from: TaskStatus,
        to: TaskStatus,
    ) -> Result<Option<Task>, AppError>;

    /// Appends a formatted entry to one of the remark logs under a row lock.
    async fn append_remarks(
        &self,
        db: &PgPool,
        id: i64,
        log: RemarkLog,
        entry: &str,
    ) -> Result<Option<Task>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskRepository;

impl TaskRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    async fn find_all_details(&self, db: &PgPool) -> Result<Vec<TaskDetail>, AppError> {
        let query = format!("{} ORDER BY t.task_id DESC", DETAIL_SELECT);
        let rows = sqlx::query_as::<_, TaskDetail>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    async fn find_available(&self, db: &PgPool) -> Result<Vec<TaskDetail>, AppError> {
        let query = format!(
            "{} WHERE t.volunteer_id IS NULL AND t.status = $1 ORDER BY t.deadline ASC, t.task_id",
            DETAIL_SELECT
        );
        let rows = sqlx::query_as::<_, TaskDetail>(&query)
            .bind(TaskStatus::Pending.as_str())
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_by_volunteer(
        &self,
        db: &PgPool,
        volunteer_id: i64,
    ) -> Result<Vec<TaskDetail>, AppError> {
        let query = format!(
            "{} WHERE t.volunteer_id = $1 ORDER BY t.task_id DESC",
            DETAIL_SELECT
        );
        let rows = sqlx::query_as::<_, TaskDetail>(&query)
            .bind(volunteer_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Task>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE task_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn assign_volunteer(
        &self,
        db: &PgPool,
        id: i64,
        volunteer_id: i64,
    ) -> Result<Option<Task>, AppError> {
        let query = format!(
            "UPDATE {} SET volunteer_id = $2, status = $3 \
             WHERE task_id = $1 AND volunteer_id IS NULL AND status = $4 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(volunteer_id)
            .bind(TaskStatus::InProgress.as_str())
            .bind(TaskStatus::Pending.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn update_status(
        &self,
        db: &PgPool,
        id: i64,
        from: TaskStatus,
        to: TaskStatus,
    ) -> Result<Option<Task>, AppError> {
        let query = format!(
            "UPDATE {} SET status = $2 WHERE task_id = $1 AND status = $3 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(to.as_str())
            .bind(from.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn append_remarks(
        &self,
        db: &PgPool,
        id: i64,
        log: RemarkLog,
        entry: &str,
    ) -> Result<Option<Task>, AppError> {
        let mut tx = begin_transaction(db).await?;

        let lock = format!(
            "SELECT {} FROM {} WHERE task_id = $1 FOR UPDATE",
            log.column(),
            TABLE_NAME
        );
        let existing: Option<Option<String>> = sqlx::query_scalar(&lock)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let update = format!(
            "UPDATE {} SET {} = $2 WHERE task_id = $1 RETURNING {}",
            TABLE_NAME,
            log.column(),
            SELECT_COLUMNS
        );
        let task = sqlx::query_as::<_, Task>(&update)
            .bind(id)
            .bind(append_remark(existing.as_deref(), entry))
            .fetch_one(&mut *tx)
            .await?;

        commit_transaction(tx).await?;
        Ok(Some(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remark_logs_map_to_columns() {
        assert_eq!(RemarkLog::Volunteer.column(), "volunteer_remarks");
        assert_eq!(RemarkLog::Admin.column(), "admin_remarks");
        assert!(SELECT_COLUMNS.contains("volunteer_remarks"));
        assert!(SELECT_COLUMNS.contains("admin_remarks"));
    }

    #[test]
    fn detail_select_exposes_join_aliases() {
        assert!(DETAIL_SELECT.contains("volunteer_name"));
        assert!(DETAIL_SELECT.contains("requester_name"));
        assert!(DETAIL_SELECT.contains("LEFT JOIN users v"));
    }
}
