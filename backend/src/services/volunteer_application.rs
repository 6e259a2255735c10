//! Applications to join the volunteer pool.

use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        user::User,
        volunteer_application::{ApplicationPayload, ApplicationStatus, VolunteerApplication},
    },
    repositories::volunteer_application::VolunteerApplicationRepositoryTrait,
};

pub const APPLICATION_NOT_FOUND_MESSAGE: &str = "Volunteer application not found";

fn not_found() -> AppError {
    AppError::NotFound(APPLICATION_NOT_FOUND_MESSAGE.into())
}

pub async fn apply(
    repo: &dyn VolunteerApplicationRepositoryTrait,
    db: &PgPool,
    actor: &User,
    payload: ApplicationPayload,
) -> Result<VolunteerApplication, AppError> {
    payload.validate()?;
    if actor.can_act_as_volunteer() {
        return Err(AppError::Conflict("User is already a volunteer".into()));
    }
    if repo.has_pending(db, actor.user_id).await? {
        return Err(AppError::Conflict(
            "You already have a pending volunteer application".into(),
        ));
    }
    let application = repo.create(db, actor.user_id, &payload.description).await?;
    tracing::info!(
        application_id = application.application_id,
        user_id = actor.user_id,
        "Volunteer application submitted"
    );
    Ok(application)
}

pub async fn edit_description(
    repo: &dyn VolunteerApplicationRepositoryTrait,
    db: &PgPool,
    id: i64,
    payload: ApplicationPayload,
) -> Result<VolunteerApplication, AppError> {
    payload.validate()?;
    repo.update_description(db, id, &payload.description)
        .await?
        .ok_or_else(not_found)
}

/// Applies an admin decision to a pending application.
pub async fn review(
    repo: &dyn VolunteerApplicationRepositoryTrait,
    db: &PgPool,
    id: i64,
    decision: ApplicationStatus,
) -> Result<VolunteerApplication, AppError> {
    let application = repo.find_by_id(db, id).await?.ok_or_else(not_found)?;
    application.status.review(decision)?;

    let reviewed = match decision {
        ApplicationStatus::Approved => repo.accept(db, id).await?,
        _ => repo.reject(db, id).await?,
    }
    .ok_or_else(|| {
        AppError::Conflict(format!(
            "Volunteer application {} is no longer pending",
            id
        ))
    })?;

    tracing::info!(
        application_id = id,
        user_id = reviewed.user_id,
        status = %reviewed.status,
        "Volunteer application reviewed"
    );
    Ok(reviewed)
}

pub async fn delete(
    repo: &dyn VolunteerApplicationRepositoryTrait,
    db: &PgPool,
    id: i64,
) -> Result<(), AppError> {
    if repo.delete(db, id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}
