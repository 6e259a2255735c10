use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::feedback::{CreateFeedback, Feedback, FeedbackStatusPayload},
    repositories::{FeedbackRepository, FeedbackRepositoryTrait},
    state::AppState,
};

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedback>,
) -> Result<(StatusCode, Json<Feedback>), AppError> {
    payload.validate()?;
    let feedback = FeedbackRepository::new().create(&state.pool, &payload).await?;
    tracing::info!(feedback_id = feedback.id, "Feedback received");
    Ok((StatusCode::CREATED, Json(feedback)))
}

pub async fn list_feedback(State(state): State<AppState>) -> Result<Json<Vec<Feedback>>, AppError> {
    let feedback = FeedbackRepository::new().find_all(&state.pool).await?;
    Ok(Json(feedback))
}

pub async fn update_feedback_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FeedbackStatusPayload>,
) -> Result<Json<Feedback>, AppError> {
    let feedback = FeedbackRepository::new()
        .update_status(&state.pool, id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Feedback not found".into()))?;
    Ok(Json(feedback))
}
