use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    models::{
        password_reset::{ForgotPasswordRequest, ResetPasswordRequest},
        user::{LoginRequest, LoginResponse, RegisterUser, User, UserResponse},
    },
    repositories::UserRepository,
    services::{
        auth as auth_service,
        password_reset::{self, PASSWORD_RESET_MESSAGE, RESET_LINK_SENT_MESSAGE},
    },
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response =
        auth_service::login(&UserRepository::new(), &state.pool, &state.config, payload).await?;
    Ok(Json(response))
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = auth_service::register(&UserRepository::new(), &state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn me(Extension(user): Extension<User>) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(user.into()))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    password_reset::request_reset(
        &UserRepository::new(),
        state.mailer.as_ref(),
        &state.pool,
        &state.config,
        payload,
    )
    .await?;
    Ok(Json(json!({ "message": RESET_LINK_SENT_MESSAGE })))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    password_reset::reset_password(&UserRepository::new(), &state.pool, payload).await?;
    Ok(Json(json!({ "message": PASSWORD_RESET_MESSAGE })))
}
