use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::user::{UpdateUser, User, UserResponse},
    repositories::{UserRepository, UserRepositoryTrait},
    services::user as user_service,
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserRepository::new().find_all(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(actor): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service::get_user(&UserRepository::new(), &state.pool, &actor, user_id).await?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(actor): Extension<User>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service::update_user(
        &UserRepository::new(),
        &state.pool,
        &actor,
        user_id,
        payload,
    )
    .await?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(actor): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if actor.user_id == user_id {
        return Err(AppError::BadRequest(
            "Administrators cannot delete their own account".into(),
        ));
    }
    user_service::delete_user(&UserRepository::new(), &state.pool, user_id).await?;
    tracing::info!(user_id, actor_id = actor.user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
