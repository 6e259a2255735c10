use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::{
        user::User,
        volunteer_application::{
            ApplicationPayload, ApplicationStatus, VolunteerApplication, VolunteerApplicationView,
        },
    },
    repositories::{VolunteerApplicationRepository, VolunteerApplicationRepositoryTrait},
    services::{user::ensure_can_access, volunteer_application as application_service},
    state::AppState,
};

pub async fn apply(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<(StatusCode, Json<VolunteerApplication>), AppError> {
    let application = application_service::apply(
        &VolunteerApplicationRepository::new(),
        &state.pool,
        &user,
        payload,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn list_user_applications(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<VolunteerApplication>>, AppError> {
    ensure_can_access(&user, user_id)?;
    let applications = VolunteerApplicationRepository::new()
        .find_by_user(&state.pool, user_id)
        .await?;
    Ok(Json(applications))
}

pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<VolunteerApplicationView>>, AppError> {
    let applications = VolunteerApplicationRepository::new()
        .find_views(&state.pool)
        .await?;
    Ok(Json(applications))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VolunteerApplicationView>, AppError> {
    let application = VolunteerApplicationRepository::new()
        .find_view_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(application_service::APPLICATION_NOT_FOUND_MESSAGE.into())
        })?;
    Ok(Json(application))
}

pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<Json<VolunteerApplication>, AppError> {
    let application = application_service::edit_description(
        &VolunteerApplicationRepository::new(),
        &state.pool,
        id,
        payload,
    )
    .await?;
    Ok(Json(application))
}

pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    application_service::delete(&VolunteerApplicationRepository::new(), &state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn accept_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VolunteerApplication>, AppError> {
    let application = application_service::review(
        &VolunteerApplicationRepository::new(),
        &state.pool,
        id,
        ApplicationStatus::Approved,
    )
    .await?;
    Ok(Json(application))
}

pub async fn reject_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VolunteerApplication>, AppError> {
    let application = application_service::review(
        &VolunteerApplicationRepository::new(),
        &state.pool,
        id,
        ApplicationStatus::Rejected,
    )
    .await?;
    Ok(Json(application))
}
