//! Inventory requests and stock allocation.

use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        resource::{ReplenishPayload, Resource},
        resource_request::{CreateResourceRequest, ResourceRequest, ResourceRequestStatus},
        user::User,
    },
    repositories::{
        resource::ResourceRepositoryTrait,
        resource_request::{ResourceRequestRepositoryTrait, MISSING_USER_OR_RESOURCE_MESSAGE},
    },
    services::user::ensure_can_access,
};

pub const RESOURCE_REQUEST_NOT_FOUND_MESSAGE: &str = "Resource request not found";

const OPEN_STATUSES: &[ResourceRequestStatus] = &[
    ResourceRequestStatus::Pending,
    ResourceRequestStatus::Accepted,
];

async fn require_request(
    repo: &dyn ResourceRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<ResourceRequest, AppError> {
    repo.find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE_REQUEST_NOT_FOUND_MESSAGE.into()))
}

fn changed_concurrently(id: i64) -> AppError {
    AppError::Conflict(format!("Resource request {} changed status concurrently", id))
}

pub async fn request_resource(
    resources: &dyn ResourceRepositoryTrait,
    requests: &dyn ResourceRequestRepositoryTrait,
    db: &PgPool,
    actor: &User,
    payload: CreateResourceRequest,
) -> Result<ResourceRequest, AppError> {
    payload.validate()?;
    if resources.find_by_id(db, payload.resource_id).await?.is_none() {
        return Err(AppError::NotFound(MISSING_USER_OR_RESOURCE_MESSAGE.into()));
    }
    let request = requests.create(db, actor.user_id, &payload).await?;
    tracing::info!(
        request_id = request.request_id,
        resource_id = request.resource_id,
        quantity = request.requested_quantity,
        "Resource requested"
    );
    Ok(request)
}

pub async fn reject(
    requests: &dyn ResourceRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<ResourceRequest, AppError> {
    let request = require_request(requests, db, id).await?;
    let next = request.status.reject()?;
    let rejected = requests
        .transition(db, id, OPEN_STATUSES, next)
        .await?
        .ok_or_else(|| changed_concurrently(id))?;
    tracing::info!(request_id = id, "Resource request rejected");
    Ok(rejected)
}

/// Citizens may withdraw their own request while it is still pending.
pub async fn cancel(
    requests: &dyn ResourceRequestRepositoryTrait,
    db: &PgPool,
    actor: &User,
    id: i64,
) -> Result<ResourceRequest, AppError> {
    let request = require_request(requests, db, id).await?;
    ensure_can_access(actor, request.user_id)?;
    let next = request.status.cancel()?;
    let cancelled = requests
        .transition(db, id, &[ResourceRequestStatus::Pending], next)
        .await?
        .ok_or_else(|| changed_concurrently(id))?;
    tracing::info!(request_id = id, user_id = actor.user_id, "Resource request cancelled");
    Ok(cancelled)
}

pub async fn allocate(
    requests: &dyn ResourceRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<ResourceRequest, AppError> {
    let (request, resource) = requests.allocate(db, id).await?;
    tracing::info!(
        request_id = id,
        resource_id = resource.resource_id,
        allocated = request.requested_quantity,
        remaining = resource.available_quantity,
        "Resource allocated"
    );
    Ok(request)
}

pub async fn replenish(
    resources: &dyn ResourceRepositoryTrait,
    db: &PgPool,
    resource_id: i64,
    payload: ReplenishPayload,
) -> Result<Resource, AppError> {
    payload.validate()?;
    let resource = resources
        .replenish(db, resource_id, payload.quantity_to_add)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".into()))?;
    tracing::info!(
        resource_id,
        added = payload.quantity_to_add,
        available = resource.available_quantity,
        "Resource replenished"
    );
    Ok(resource)
}
