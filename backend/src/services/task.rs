//! Volunteer task lifecycle: acceptance, status changes and remark logs.

use chrono_tz::Tz;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        task::{remark_entry, validate_remark, RemarksPayload, Task, TaskStatus},
        user::User,
    },
    repositories::{
        task::{RemarkLog, TaskRepositoryTrait},
        user::UserRepositoryTrait,
    },
    services::user::{ensure_can_access, require_user},
    utils::time::now_in_timezone,
};

pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";
pub const ALREADY_ASSIGNED_MESSAGE: &str = "Task is already assigned to a volunteer";
pub const NOT_AVAILABLE_MESSAGE: &str = "Task is not available for acceptance";
pub const NOT_A_VOLUNTEER_MESSAGE: &str = "User is not a volunteer";

async fn require_task(
    repo: &dyn TaskRepositoryTrait,
    db: &PgPool,
    task_id: i64,
) -> Result<Task, AppError> {
    repo.find_by_id(db, task_id)
        .await?
        .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND_MESSAGE.into()))
}

/// Volunteers may only act on tasks assigned to them; admins on any task.
fn ensure_assignee(actor: &User, task: &Task) -> Result<(), AppError> {
    if actor.is_admin() || task.volunteer_id == Some(actor.user_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Task is assigned to another volunteer".into(),
        ))
    }
}

pub async fn accept_task(
    tasks: &dyn TaskRepositoryTrait,
    users: &dyn UserRepositoryTrait,
    db: &PgPool,
    actor: &User,
    task_id: i64,
    volunteer_id: i64,
) -> Result<Task, AppError> {
    let task = require_task(tasks, db, task_id).await?;
    if task.volunteer_id.is_some() {
        return Err(AppError::Conflict(ALREADY_ASSIGNED_MESSAGE.into()));
    }
    if task.status != TaskStatus::Pending {
        return Err(AppError::Conflict(NOT_AVAILABLE_MESSAGE.into()));
    }

    let volunteer = require_user(users, db, volunteer_id).await?;
    if !volunteer.is_volunteer() {
        return Err(AppError::BadRequest(NOT_A_VOLUNTEER_MESSAGE.into()));
    }
    ensure_can_access(actor, volunteer_id)?;

    let accepted = tasks
        .assign_volunteer(db, task_id, volunteer_id)
        .await?
        .ok_or_else(|| AppError::Conflict(ALREADY_ASSIGNED_MESSAGE.into()))?;

    tracing::info!(task_id, volunteer_id, "Task accepted");
    Ok(accepted)
}

pub async fn update_status(
    tasks: &dyn TaskRepositoryTrait,
    db: &PgPool,
    actor: &User,
    task_id: i64,
    raw_status: &str,
) -> Result<Task, AppError> {
    let next: TaskStatus = raw_status.parse()?;
    let task = require_task(tasks, db, task_id).await?;
    ensure_assignee(actor, &task)?;
    task.status.transition(next)?;

    let updated = tasks
        .update_status(db, task_id, task.status, next)
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!("Task {} changed status concurrently", task_id))
        })?;

    tracing::info!(task_id, from = %task.status, to = %next, "Task status changed");
    Ok(updated)
}

pub async fn add_volunteer_remarks(
    tasks: &dyn TaskRepositoryTrait,
    db: &PgPool,
    time_zone: &Tz,
    actor: &User,
    task_id: i64,
    payload: RemarksPayload,
) -> Result<Task, AppError> {
    let task = require_task(tasks, db, task_id).await?;
    if task.volunteer_id.is_none() {
        return Err(AppError::BadRequest(
            "Task has no assigned volunteer".into(),
        ));
    }
    ensure_assignee(actor, &task)?;
    append(tasks, db, time_zone, task_id, RemarkLog::Volunteer, &payload.remarks).await
}

pub async fn add_admin_remarks(
    tasks: &dyn TaskRepositoryTrait,
    db: &PgPool,
    time_zone: &Tz,
    task_id: i64,
    payload: RemarksPayload,
) -> Result<Task, AppError> {
    require_task(tasks, db, task_id).await?;
    append(tasks, db, time_zone, task_id, RemarkLog::Admin, &payload.remarks).await
}

async fn append(
    tasks: &dyn TaskRepositoryTrait,
    db: &PgPool,
    time_zone: &Tz,
    task_id: i64,
    log: RemarkLog,
    raw: &str,
) -> Result<Task, AppError> {
    let text = validate_remark(raw).map_err(AppError::BadRequest)?;
    let entry = remark_entry(text, now_in_timezone(time_zone));
    tasks
        .append_remarks(db, task_id, log, &entry)
        .await?
        .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND_MESSAGE.into()))
}

pub async fn get_task(
    tasks: &dyn TaskRepositoryTrait,
    db: &PgPool,
    task_id: i64,
) -> Result<Task, AppError> {
    require_task(tasks, db, task_id).await
}
