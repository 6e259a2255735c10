use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        resource::{CreateResource, ReplenishPayload, Resource},
        resource_request::{CreateResourceRequest, ResourceRequest, ResourceRequestView},
        user::User,
    },
    repositories::{
        ResourceRepository, ResourceRepositoryTrait, ResourceRequestRepository,
        ResourceRequestRepositoryTrait,
    },
    services::{resource_request as resource_service, user::ensure_can_access},
    state::AppState,
};

pub async fn list_resources(State(state): State<AppState>) -> Result<Json<Vec<Resource>>, AppError> {
    let resources = ResourceRepository::new().find_all(&state.pool).await?;
    Ok(Json(resources))
}

pub async fn create_resource(
    State(state): State<AppState>,
    Json(payload): Json<CreateResource>,
) -> Result<(StatusCode, Json<Resource>), AppError> {
    payload.validate()?;
    let resource = ResourceRepository::new().create(&state.pool, &payload).await?;
    tracing::info!(resource_id = resource.resource_id, "Resource created");
    Ok((StatusCode::CREATED, Json(resource)))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if ResourceRepository::new()
        .delete(&state.pool, resource_id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Resource not found".into()))
    }
}

pub async fn replenish_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<i64>,
    Json(payload): Json<ReplenishPayload>,
) -> Result<Json<Resource>, AppError> {
    let resource =
        resource_service::replenish(&ResourceRepository::new(), &state.pool, resource_id, payload)
            .await?;
    Ok(Json(resource))
}

pub async fn request_resource(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceRequest>), AppError> {
    let request = resource_service::request_resource(
        &ResourceRepository::new(),
        &ResourceRequestRepository::new(),
        &state.pool,
        &user,
        payload,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn list_user_requests(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ResourceRequestView>>, AppError> {
    ensure_can_access(&user, user_id)?;
    let requests = ResourceRequestRepository::new()
        .find_views(&state.pool, Some(user_id))
        .await?;
    Ok(Json(requests))
}

pub async fn list_all_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceRequestView>>, AppError> {
    let requests = ResourceRequestRepository::new()
        .find_views(&state.pool, None)
        .await?;
    Ok(Json(requests))
}

pub async fn reject_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResourceRequest>, AppError> {
    let request = resource_service::reject(&ResourceRequestRepository::new(), &state.pool, id).await?;
    Ok(Json(request))
}

pub async fn cancel_request(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<i64>,
) -> Result<Json<ResourceRequest>, AppError> {
    let request =
        resource_service::cancel(&ResourceRequestRepository::new(), &state.pool, &user, id).await?;
    Ok(Json(request))
}

pub async fn accept_and_allocate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResourceRequest>, AppError> {
    let request =
        resource_service::allocate(&ResourceRequestRepository::new(), &state.pool, id).await?;
    Ok(Json(request))
}
