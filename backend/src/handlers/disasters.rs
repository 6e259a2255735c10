use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    models::disaster::{
        Disaster, DisasterListQuery, DisasterPayload, DisasterStatus, DisasterType, Severity,
    },
    repositories::{DisasterFilter, DisasterRepository, DisasterRepositoryTrait},
    state::AppState,
};

fn not_found() -> AppError {
    AppError::NotFound("Disaster not found".into())
}

async fn list(state: &AppState, filter: DisasterFilter) -> Result<Json<Vec<Disaster>>, AppError> {
    let disasters = DisasterRepository::new().find(&state.pool, filter).await?;
    Ok(Json(disasters))
}

pub async fn list_disasters(
    State(state): State<AppState>,
    Query(query): Query<DisasterListQuery>,
) -> Result<Json<Vec<Disaster>>, AppError> {
    let status = query
        .status
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<DisasterStatus>)
        .transpose()?;
    list(
        &state,
        DisasterFilter {
            status,
            ..DisasterFilter::default()
        },
    )
    .await
}

pub async fn get_disaster(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Disaster>, AppError> {
    let disaster = DisasterRepository::new()
        .find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(disaster))
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Disaster>>, AppError> {
    let disaster_type: DisasterType = raw.parse()?;
    list(
        &state,
        DisasterFilter {
            disaster_type: Some(disaster_type),
            ..DisasterFilter::default()
        },
    )
    .await
}

pub async fn list_by_severity(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Disaster>>, AppError> {
    let severity: Severity = raw.parse()?;
    list(
        &state,
        DisasterFilter {
            severity: Some(severity),
            ..DisasterFilter::default()
        },
    )
    .await
}

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Disaster>>, AppError> {
    let status: DisasterStatus = raw.parse()?;
    list(
        &state,
        DisasterFilter {
            status: Some(status),
            ..DisasterFilter::default()
        },
    )
    .await
}

pub async fn create_disaster(
    State(state): State<AppState>,
    Json(payload): Json<DisasterPayload>,
) -> Result<(StatusCode, Json<Disaster>), AppError> {
    payload.validate()?;
    let reported_at = payload.reported_at.unwrap_or_else(Utc::now);
    let disaster = DisasterRepository::new()
        .create(&state.pool, &payload, reported_at)
        .await?;
    tracing::info!(
        disaster_id = disaster.disaster_id,
        severity = %disaster.severity,
        "Disaster reported"
    );
    Ok((StatusCode::CREATED, Json(disaster)))
}

pub async fn update_disaster(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DisasterPayload>,
) -> Result<Json<Disaster>, AppError> {
    payload.validate()?;
    let disaster = DisasterRepository::new()
        .update(&state.pool, id, &payload)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(disaster))
}

pub async fn delete_disaster(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if DisasterRepository::new().delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
