use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::{
        task::Task,
        task_request::{CreateTaskRequest, TaskRequest, TaskRequestStatus},
        user::User,
    },
    repositories::{TaskRequestRepository, TaskRequestRepositoryTrait, UserRepository},
    services::task_request as task_request_service,
    state::AppState,
};

pub async fn submit_task_request(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskRequest>), AppError> {
    let request =
        task_request_service::submit(&TaskRequestRepository::new(), &state.pool, &user, payload)
            .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn list_task_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskRequest>>, AppError> {
    let requests = TaskRequestRepository::new()
        .find_all(&state.pool, None)
        .await?;
    Ok(Json(requests))
}

pub async fn list_task_requests_by_status(
    State(state): State<AppState>,
    Path(raw_status): Path<String>,
) -> Result<Json<Vec<TaskRequest>>, AppError> {
    let status: TaskRequestStatus = raw_status.parse()?;
    let requests = TaskRequestRepository::new()
        .find_all(&state.pool, Some(status))
        .await?;
    Ok(Json(requests))
}

pub async fn list_user_task_requests(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TaskRequest>>, AppError> {
    let requests = task_request_service::list_for_user(
        &TaskRequestRepository::new(),
        &UserRepository::new(),
        &state.pool,
        &user,
        user_id,
    )
    .await?;
    Ok(Json(requests))
}

pub async fn approve_task_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = task_request_service::approve(
        &TaskRequestRepository::new(),
        &state.pool,
        id,
        state.config.task_deadline_days,
    )
    .await?;
    Ok(Json(task))
}

pub async fn reject_task_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskRequest>, AppError> {
    let request = task_request_service::reject(&TaskRequestRepository::new(), &state.pool, id).await?;
    Ok(Json(request))
}

pub async fn delete_task_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    task_request_service::delete(&TaskRequestRepository::new(), &state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
