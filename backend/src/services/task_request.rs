//! Review of citizen task requests.

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        task::Task,
        task_request::{CreateTaskRequest, TaskRequest, TaskRequestStatus},
        user::User,
    },
    repositories::{task_request::TaskRequestRepositoryTrait, user::UserRepositoryTrait},
    services::user::{ensure_can_access, require_user},
    utils::time::task_deadline,
};

pub const TASK_REQUEST_NOT_FOUND_MESSAGE: &str = "Task request not found";

async fn require_request(
    repo: &dyn TaskRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<TaskRequest, AppError> {
    repo.find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(TASK_REQUEST_NOT_FOUND_MESSAGE.into()))
}

fn stale(request: &TaskRequest, decision: TaskRequestStatus) -> AppError {
    AppError::Conflict(format!(
        "Task request {} is no longer pending and cannot be {}",
        request.request_id,
        decision.as_str().to_lowercase()
    ))
}

pub async fn submit(
    repo: &dyn TaskRequestRepositoryTrait,
    db: &PgPool,
    actor: &User,
    payload: CreateTaskRequest,
) -> Result<TaskRequest, AppError> {
    payload.validate()?;
    let request = repo.create(db, actor.user_id, &payload).await?;
    tracing::info!(request_id = request.request_id, user_id = actor.user_id, "Task request submitted");
    Ok(request)
}

pub async fn list_for_user(
    repo: &dyn TaskRequestRepositoryTrait,
    users: &dyn UserRepositoryTrait,
    db: &PgPool,
    actor: &User,
    user_id: i64,
) -> Result<Vec<TaskRequest>, AppError> {
    ensure_can_access(actor, user_id)?;
    require_user(users, db, user_id).await?;
    repo.find_by_user(db, user_id).await
}

/// Approves a pending request and creates its task.
pub async fn approve(
    repo: &dyn TaskRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
    deadline_days: i64,
) -> Result<Task, AppError> {
    let request = require_request(repo, db, id).await?;
    request.status.review(TaskRequestStatus::Approved)?;

    let deadline = task_deadline(Utc::now(), deadline_days);
    let task = repo
        .approve(db, id, deadline)
        .await?
        .ok_or_else(|| stale(&request, TaskRequestStatus::Approved))?;

    tracing::info!(
        request_id = id,
        task_id = task.task_id,
        deadline = %task.deadline,
        "Task request approved"
    );
    Ok(task)
}

pub async fn reject(
    repo: &dyn TaskRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<TaskRequest, AppError> {
    let request = require_request(repo, db, id).await?;
    request.status.review(TaskRequestStatus::Rejected)?;

    let rejected = repo
        .reject(db, id)
        .await?
        .ok_or_else(|| stale(&request, TaskRequestStatus::Rejected))?;

    tracing::info!(request_id = id, "Task request rejected");
    Ok(rejected)
}

pub async fn delete(
    repo: &dyn TaskRequestRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<(), AppError> {
    if repo.delete(db, id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(TASK_REQUEST_NOT_FOUND_MESSAGE.into()))
    }
}
