use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::{
        notification::{Notification, NotificationPayload},
        user::User,
    },
    repositories::{NotificationRepository, NotificationRepositoryTrait},
    services::notification as notification_service,
    state::AppState,
};

pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<NotificationPayload>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification =
        notification_service::create(&NotificationRepository::new(), &state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = NotificationRepository::new().find_all(&state.pool).await?;
    Ok(Json(notifications))
}

pub async fn notifications_for_role(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(role): Path<String>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let feed = notification_service::feed_for_role(
        &NotificationRepository::new(),
        &state.pool,
        &user,
        &role,
    )
    .await?;
    Ok(Json(feed))
}

pub async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NotificationPayload>,
) -> Result<Json<Notification>, AppError> {
    let notification =
        notification_service::update(&NotificationRepository::new(), &state.pool, id, payload)
            .await?;
    Ok(Json(notification))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    notification_service::deactivate(&NotificationRepository::new(), &state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
