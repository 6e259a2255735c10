//! Resource (inventory) repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::resource::{CreateResource, Resource};
use crate::repositories::common::is_foreign_key_violation;

const TABLE_NAME: &str = "resources";
pub(crate) const SELECT_COLUMNS: &str = "resource_id, name, resource_type, available_quantity";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepositoryTrait: Send + Sync {
    async fn find_all(&self, db: &PgPool) -> Result<Vec<Resource>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Resource>, AppError>;

    async fn create(&self, db: &PgPool, payload: &CreateResource) -> Result<Resource, AppError>;

    /// Adds `quantity` to the stock. Returns `None` for an unknown resource.
    async fn replenish(
        &self,
        db: &PgPool,
        id: i64,
        quantity: i32,
    ) -> Result<Option<Resource>, AppError>;

    /// Fails with `Conflict` while requests still reference the resource.
    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceRepository;

impl ResourceRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceRepositoryTrait for ResourceRepository {
    async fn find_all(&self, db: &PgPool) -> Result<Vec<Resource>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY name, resource_id",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Resource>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<Resource>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE resource_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn create(&self, db: &PgPool, payload: &CreateResource) -> Result<Resource, AppError> {
        let query = format!(
            "INSERT INTO {} (name, resource_type, available_quantity) VALUES ($1, $2, $3) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Resource>(&query)
            .bind(payload.name.trim())
            .bind(payload.resource_type.trim())
            .bind(payload.available_quantity)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn replenish(
        &self,
        db: &PgPool,
        id: i64,
        quantity: i32,
    ) -> Result<Option<Resource>, AppError> {
        let query = format!(
            "UPDATE {} SET available_quantity = available_quantity + $2 \
             WHERE resource_id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(quantity)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE resource_id = $1", TABLE_NAME);
        match sqlx::query(&query).bind(id).execute(db).await {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(err) if is_foreign_key_violation(&err) => Err(AppError::Conflict(
                "Resource still has requests and cannot be deleted".into(),
            )),
            Err(err) => Err(err.into()),
        }
    }
}
