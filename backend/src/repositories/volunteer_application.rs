//! Volunteer application repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::UserRole;
use crate::models::volunteer_application::{
    ApplicationStatus, VolunteerApplication, VolunteerApplicationView,
};
use crate::repositories::transaction::{begin_transaction, commit_transaction, rollback_transaction};

const TABLE_NAME: &str = "volunteer_applications";
const SELECT_COLUMNS: &str = "application_id, user_id, description, status, application_date";
const VIEW_SELECT: &str = "SELECT a.application_id, a.user_id, a.description, a.status, \
     a.application_date, u.name AS username, u.email, u.phone_number, u.location \
     FROM volunteer_applications a JOIN users u ON u.user_id = a.user_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerApplicationRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        description: &str,
    ) -> Result<VolunteerApplication, AppError>;

    async fn has_pending(&self, db: &PgPool, user_id: i64) -> Result<bool, AppError>;

    async fn find_by_user(
        &self,
        db: &PgPool,
        user_id: i64,
    ) -> Result<Vec<VolunteerApplication>, AppError>;

    async fn find_views(&self, db: &PgPool) -> Result<Vec<VolunteerApplicationView>, AppError>;

    async fn find_view_by_id(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplicationView>, AppError>;

    async fn find_by_id(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplication>, AppError>;

    async fn update_description(
        &self,
        db: &PgPool,
        id: i64,
        description: &str,
    ) -> Result<Option<VolunteerApplication>, AppError>;

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;

    /// Approves a PENDING application and promotes the applicant to Volunteer.
    async fn accept(&self, db: &PgPool, id: i64)
        -> Result<Option<VolunteerApplication>, AppError>;

    async fn reject(&self, db: &PgPool, id: i64)
        -> Result<Option<VolunteerApplication>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VolunteerApplicationRepository;

impl VolunteerApplicationRepository {
    pub fn new() -> Self {
        Self
    }
}

fn review_query() -> String {
    format!(
        "UPDATE {} SET status = $2 WHERE application_id = $1 AND status = $3 RETURNING {}",
        TABLE_NAME, SELECT_COLUMNS
    )
}

#[async_trait]
impl VolunteerApplicationRepositoryTrait for VolunteerApplicationRepository {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        description: &str,
    ) -> Result<VolunteerApplication, AppError> {
        let query = format!(
            "INSERT INTO {} (user_id, description, status) VALUES ($1, $2, $3) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, VolunteerApplication>(&query)
            .bind(user_id)
            .bind(description.trim())
            .bind(ApplicationStatus::Pending.as_str())
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn has_pending(&self, db: &PgPool, user_id: i64) -> Result<bool, AppError> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = $1 AND status = $2)",
            TABLE_NAME
        );
        let exists: bool = sqlx::query_scalar(&query)
            .bind(user_id)
            .bind(ApplicationStatus::Pending.as_str())
            .fetch_one(db)
            .await?;
        Ok(exists)
    }

    async fn find_by_user(
        &self,
        db: &PgPool,
        user_id: i64,
    ) -> Result<Vec<VolunteerApplication>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY application_id DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, VolunteerApplication>(&query)
            .bind(user_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_views(&self, db: &PgPool) -> Result<Vec<VolunteerApplicationView>, AppError> {
        let query = format!("{} ORDER BY a.application_id DESC", VIEW_SELECT);
        let rows = sqlx::query_as::<_, VolunteerApplicationView>(&query)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_view_by_id(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplicationView>, AppError> {
        let query = format!("{} WHERE a.application_id = $1", VIEW_SELECT);
        let row = sqlx::query_as::<_, VolunteerApplicationView>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn find_by_id(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplication>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE application_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, VolunteerApplication>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn update_description(
        &self,
        db: &PgPool,
        id: i64,
        description: &str,
    ) -> Result<Option<VolunteerApplication>, AppError> {
        let query = format!(
            "UPDATE {} SET description = $2 WHERE application_id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, VolunteerApplication>(&query)
            .bind(id)
            .bind(description.trim())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE application_id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn accept(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplication>, AppError> {
        let mut tx = begin_transaction(db).await?;

        let approved = sqlx::query_as::<_, VolunteerApplication>(&review_query())
            .bind(id)
            .bind(ApplicationStatus::Approved.as_str())
            .bind(ApplicationStatus::Pending.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(application) = approved else {
            rollback_transaction(tx).await?;
            return Ok(None);
        };

        sqlx::query("UPDATE users SET role = $2 WHERE user_id = $1 AND role <> 'Admin'")
            .bind(application.user_id)
            .bind(UserRole::Volunteer.as_str())
            .execute(&mut *tx)
            .await?;

        commit_transaction(tx).await?;
        Ok(Some(application))
    }

    async fn reject(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<Option<VolunteerApplication>, AppError> {
        let row = sqlx::query_as::<_, VolunteerApplication>(&review_query())
            .bind(id)
            .bind(ApplicationStatus::Rejected.as_str())
            .bind(ApplicationStatus::Pending.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_query_only_touches_pending_rows() {
        let query = review_query();
        assert!(query.contains("status = $3"));
        assert!(query.starts_with("UPDATE volunteer_applications"));
    }
}
