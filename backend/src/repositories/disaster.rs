//! Disaster repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::AppError;
use crate::models::disaster::{
    Disaster, DisasterPayload, DisasterStatus, DisasterType, Severity,
};
use crate::repositories::common::push_clause;

const TABLE_NAME: &str = "disasters";
const SELECT_COLUMNS: &str =
    "disaster_id, name, description, location, disaster_type, severity, status, reported_at";

/// Optional equality filters for disaster listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisasterFilter {
    pub disaster_type: Option<DisasterType>,
    pub severity: Option<Severity>,
    pub status: Option<DisasterStatus>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisasterRepositoryTrait: Send + Sync {
    /// Matching disasters, newest id first.
    async fn find(&self, db: &PgPool, filter: DisasterFilter) -> Result<Vec<Disaster>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Disaster>, AppError>;

    async fn create(
        &self,
        db: &PgPool,
        payload: &DisasterPayload,
        reported_at: DateTime<Utc>,
    ) -> Result<Disaster, AppError>;

    async fn update(
        &self,
        db: &PgPool,
        id: i64,
        payload: &DisasterPayload,
    ) -> Result<Option<Disaster>, AppError>;

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DisasterRepository;

impl DisasterRepository {
    pub fn new() -> Self {
        Self
    }
}

fn filtered_select(filter: DisasterFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", SELECT_COLUMNS, TABLE_NAME));
    let mut has_clause = false;
    if let Some(kind) = filter.disaster_type {
        push_clause(&mut builder, &mut has_clause);
        builder.push("disaster_type = ").push_bind(kind.as_str());
    }
    if let Some(severity) = filter.severity {
        push_clause(&mut builder, &mut has_clause);
        builder.push("severity = ").push_bind(severity.as_str());
    }
    if let Some(status) = filter.status {
        push_clause(&mut builder, &mut has_clause);
        builder.push("status = ").push_bind(status.as_str());
    }
    builder.push(" ORDER BY disaster_id DESC");
    builder
}

#[async_trait]
impl DisasterRepositoryTrait for DisasterRepository {
    async fn find(&self, db: &PgPool, filter: DisasterFilter) -> Result<Vec<Disaster>, AppError> {
        let mut builder = filtered_select(filter);
        let rows = builder.build_query_as::<Disaster>().fetch_all(db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Disaster>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE disaster_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, Disaster>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn create(
        &self,
        db: &PgPool,
        payload: &DisasterPayload,
        reported_at: DateTime<Utc>,
    ) -> Result<Disaster, AppError> {
        let query = format!(
            "INSERT INTO {} (name, description, location, disaster_type, severity, status, reported_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Disaster>(&query)
            .bind(payload.name.trim())
            .bind(payload.description.trim())
            .bind(payload.location.trim())
            .bind(payload.disaster_type.as_str())
            .bind(payload.severity.as_str())
            .bind(payload.status.as_str())
            .bind(reported_at)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        db: &PgPool,
        id: i64,
        payload: &DisasterPayload,
    ) -> Result<Option<Disaster>, AppError> {
        let query = format!(
            "UPDATE {} SET name = $2, description = $3, location = $4, disaster_type = $5, \
             severity = $6, status = $7, reported_at = COALESCE($8, reported_at) \
             WHERE disaster_id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Disaster>(&query)
            .bind(id)
            .bind(payload.name.trim())
            .bind(payload.description.trim())
            .bind(payload.location.trim())
            .bind(payload.disaster_type.as_str())
            .bind(payload.severity.as_str())
            .bind(payload.status.as_str())
            .bind(payload.reported_at)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE disaster_id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_select_orders_newest_first() {
        let builder = filtered_select(DisasterFilter::default());
        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {} FROM disasters ORDER BY disaster_id DESC",
                SELECT_COLUMNS
            )
        );
    }

    #[test]
    fn filters_are_bound_in_order() {
        let builder = filtered_select(DisasterFilter {
            disaster_type: Some(DisasterType::Flood),
            severity: None,
            status: Some(DisasterStatus::Active),
        });
        assert!(builder
            .sql()
            .ends_with("WHERE disaster_type = $1 AND status = $2 ORDER BY disaster_id DESC"));
    }
}
