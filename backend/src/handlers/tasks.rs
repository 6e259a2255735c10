use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::{
    error::AppError,
    models::{
        task::{AcceptTaskQuery, RemarksPayload, RemarksResponse, Task, TaskDetail, TaskStatusQuery},
        user::User,
    },
    repositories::{TaskRepository, TaskRepositoryTrait, UserRepository},
    services::{task as task_service, user::ensure_can_access},
    state::AppState,
};

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskDetail>>, AppError> {
    let tasks = TaskRepository::new().find_all_details(&state.pool).await?;
    Ok(Json(tasks))
}

pub async fn list_available_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskDetail>>, AppError> {
    let tasks = TaskRepository::new().find_available(&state.pool).await?;
    Ok(Json(tasks))
}

pub async fn list_volunteer_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(volunteer_id): Path<i64>,
) -> Result<Json<Vec<TaskDetail>>, AppError> {
    ensure_can_access(&user, volunteer_id)?;
    let tasks = TaskRepository::new()
        .find_by_volunteer(&state.pool, volunteer_id)
        .await?;
    Ok(Json(tasks))
}

pub async fn accept_task(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(task_id): Path<i64>,
    Query(query): Query<AcceptTaskQuery>,
) -> Result<Json<Task>, AppError> {
    let task = task_service::accept_task(
        &TaskRepository::new(),
        &UserRepository::new(),
        &state.pool,
        &user,
        task_id,
        query.volunteer_id,
    )
    .await?;
    Ok(Json(task))
}

pub async fn update_task_status(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(task_id): Path<i64>,
    Query(query): Query<TaskStatusQuery>,
) -> Result<Json<Task>, AppError> {
    let task = task_service::update_status(
        &TaskRepository::new(),
        &state.pool,
        &user,
        task_id,
        &query.status,
    )
    .await?;
    Ok(Json(task))
}

pub async fn add_volunteer_remarks(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(task_id): Path<i64>,
    Json(payload): Json<RemarksPayload>,
) -> Result<Json<RemarksResponse>, AppError> {
    let task = task_service::add_volunteer_remarks(
        &TaskRepository::new(),
        &state.pool,
        &state.config.time_zone,
        &user,
        task_id,
        payload,
    )
    .await?;
    Ok(Json(RemarksResponse::from(&task)))
}

pub async fn add_admin_remarks(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<RemarksPayload>,
) -> Result<Json<RemarksResponse>, AppError> {
    let task = task_service::add_admin_remarks(
        &TaskRepository::new(),
        &state.pool,
        &state.config.time_zone,
        task_id,
        payload,
    )
    .await?;
    Ok(Json(RemarksResponse::from(&task)))
}

pub async fn get_remarks(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<RemarksResponse>, AppError> {
    let task = task_service::get_task(&TaskRepository::new(), &state.pool, task_id).await?;
    Ok(Json(RemarksResponse::from(&task)))
}
