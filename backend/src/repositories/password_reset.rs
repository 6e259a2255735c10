use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::password_reset::PasswordReset;
use crate::utils::security::hash_token;

const SELECT_COLUMNS: &str = "id, user_id, token_hash, expires_at, created_at";

/// Stores the hash of `token` for `user_id`, replacing any earlier token of that user.
pub async fn create_password_reset(
    pool: &PgPool,
    user_id: i64,
    token: &str,
    expires_at: DateTime<Utc>,
) -> Result<PasswordReset, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM password_resets WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    let record = sqlx::query_as::<_, PasswordReset>(&format!(
        "INSERT INTO password_resets (id, user_id, token_hash, expires_at) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        SELECT_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(hash_token(token))
    .bind(expires_at)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(record)
}

/// Looks a token up by hash, expired or not.
pub async fn find_reset_by_token(
    pool: &PgPool,
    token: &str,
) -> Result<Option<PasswordReset>, AppError> {
    let record = sqlx::query_as::<_, PasswordReset>(&format!(
        "SELECT {} FROM password_resets WHERE token_hash = $1",
        SELECT_COLUMNS
    ))
    .bind(hash_token(token))
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn delete_reset(pool: &PgPool, reset_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM password_resets WHERE id = $1")
        .bind(reset_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn delete_expired_tokens(pool: &PgPool, now: DateTime<Utc>) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM password_resets WHERE expires_at <= $1")
        .bind(now)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
