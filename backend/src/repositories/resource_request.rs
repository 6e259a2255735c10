//! Resource request repository.
//!
//! Allocation locks the request and the resource row, applies the stock rule
//! and writes both rows in one transaction.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::resource::Resource;
use crate::models::resource_request::{
    plan_allocation, CreateResourceRequest, ResourceRequest, ResourceRequestStatus,
    ResourceRequestView,
};
use crate::repositories::common::is_foreign_key_violation;
use crate::repositories::resource::SELECT_COLUMNS as RESOURCE_COLUMNS;
use crate::repositories::transaction::{begin_transaction, commit_transaction};

const TABLE_NAME: &str = "resource_requests";
const SELECT_COLUMNS: &str =
    "request_id, user_id, resource_id, location, requested_quantity, status, request_date";
const VIEW_SELECT: &str = "SELECT rr.request_id, rr.user_id, u.name AS user_name, u.email AS user_email, \
     rr.resource_id, r.name AS resource_name, rr.requested_quantity, rr.status, rr.location, \
     rr.request_date \
     FROM resource_requests rr \
     JOIN users u ON u.user_id = rr.user_id \
     JOIN resources r ON r.resource_id = rr.resource_id";

pub const MISSING_USER_OR_RESOURCE_MESSAGE: &str = "User or Resource not found!";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRequestRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        payload: &CreateResourceRequest,
    ) -> Result<ResourceRequest, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<ResourceRequest>, AppError>;

    /// Listing rows, newest request first. `None` lists every user.
    async fn find_views(
        &self,
        db: &PgPool,
        user_id: Option<i64>,
    ) -> Result<Vec<ResourceRequestView>, AppError>;

    /// Moves the request to `to` when its current status is one of `from`.
    async fn transition(
        &self,
        db: &PgPool,
        id: i64,
        from: &[ResourceRequestStatus],
        to: ResourceRequestStatus,
    ) -> Result<Option<ResourceRequest>, AppError>;

    /// Decrements stock and marks the request ALLOCATED.
    async fn allocate(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<(ResourceRequest, Resource), AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceRequestRepository;

impl ResourceRequestRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceRequestRepositoryTrait for ResourceRequestRepository {
    async fn create(
        &self,
        db: &PgPool,
        user_id: i64,
        payload: &CreateResourceRequest,
    ) -> Result<ResourceRequest, AppError> {
        let query = format!(
            "INSERT INTO {} (user_id, resource_id, location, requested_quantity, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, ResourceRequest>(&query)
            .bind(user_id)
            .bind(payload.resource_id)
            .bind(payload.location.trim())
            .bind(payload.requested_quantity)
            .bind(ResourceRequestStatus::Pending.as_str())
            .fetch_one(db)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    AppError::NotFound(MISSING_USER_OR_RESOURCE_MESSAGE.into())
                } else {
                    err.into()
                }
            })
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<ResourceRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE request_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, ResourceRequest>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn find_views(
        &self,
        db: &PgPool,
        user_id: Option<i64>,
    ) -> Result<Vec<ResourceRequestView>, AppError> {
        let query = format!(
            "{} WHERE ($1::BIGINT IS NULL OR rr.user_id = $1) ORDER BY rr.request_id DESC",
            VIEW_SELECT
        );
        let rows = sqlx::query_as::<_, ResourceRequestView>(&query)
            .bind(user_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn transition(
        &self,
        db: &PgPool,
        id: i64,
        from: &[ResourceRequestStatus],
        to: ResourceRequestStatus,
    ) -> Result<Option<ResourceRequest>, AppError> {
        let allowed: Vec<&'static str> = from.iter().map(|status| status.as_str()).collect();
        let query = format!(
            "UPDATE {} SET status = $2 WHERE request_id = $1 AND status = ANY($3) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, ResourceRequest>(&query)
            .bind(id)
            .bind(to.as_str())
            .bind(allowed)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn allocate(
        &self,
        db: &PgPool,
        id: i64,
    ) -> Result<(ResourceRequest, Resource), AppError> {
        let mut tx = begin_transaction(db).await?;

        let lock_request = format!(
            "SELECT {} FROM {} WHERE request_id = $1 FOR UPDATE",
            SELECT_COLUMNS, TABLE_NAME
        );
        let request = sqlx::query_as::<_, ResourceRequest>(&lock_request)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource request not found".into()))?;

        let lock_resource = format!(
            "SELECT {} FROM resources WHERE resource_id = $1 FOR UPDATE",
            RESOURCE_COLUMNS
        );
        let resource = sqlx::query_as::<_, Resource>(&lock_resource)
            .bind(request.resource_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(MISSING_USER_OR_RESOURCE_MESSAGE.into()))?;

        let remaining = plan_allocation(
            request.status,
            resource.available_quantity,
            request.requested_quantity,
        )?;

        let update_resource = format!(
            "UPDATE resources SET available_quantity = $2 WHERE resource_id = $1 RETURNING {}",
            RESOURCE_COLUMNS
        );
        let resource = sqlx::query_as::<_, Resource>(&update_resource)
            .bind(resource.resource_id)
            .bind(remaining)
            .fetch_one(&mut *tx)
            .await?;

        let update_request = format!(
            "UPDATE {} SET status = $2 WHERE request_id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let request = sqlx::query_as::<_, ResourceRequest>(&update_request)
            .bind(id)
            .bind(ResourceRequestStatus::Allocated.as_str())
            .fetch_one(&mut *tx)
            .await?;

        commit_transaction(tx).await?;
        Ok((request, resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_select_joins_requester_and_resource_names() {
        assert!(VIEW_SELECT.contains("u.name AS user_name"));
        assert!(VIEW_SELECT.contains("u.email AS user_email"));
        assert!(VIEW_SELECT.contains("r.name AS resource_name"));
    }
}
