//! Forgotten-password flow: issue a mailed token, then redeem it once.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::password_reset::{ForgotPasswordRequest, ResetPasswordRequest},
    repositories::{password_reset as reset_repo, user::UserRepositoryTrait},
    services::user::USER_NOT_FOUND_MESSAGE,
    utils::{
        email::{reset_link, Mailer},
        password::hash_password,
        security::generate_reset_token,
    },
};

pub const RESET_LINK_SENT_MESSAGE: &str = "Password reset link sent to your email.";
pub const PASSWORD_RESET_MESSAGE: &str = "Password has been reset successfully.";

pub async fn request_reset(
    users: &dyn UserRepositoryTrait,
    mailer: &dyn Mailer,
    db: &PgPool,
    config: &Config,
    payload: ForgotPasswordRequest,
) -> Result<(), AppError> {
    payload.validate()?;
    let user = users
        .find_by_email(db, &payload.email)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.into()))?;

    let token = generate_reset_token();
    let expires_at = Utc::now() + Duration::minutes(config.password_reset_ttl_minutes);
    reset_repo::create_password_reset(db, user.user_id, &token, expires_at).await?;

    mailer
        .send_password_reset_email(&user.email, &reset_link(&config.frontend_url, &token))
        .await?;

    tracing::info!(user_id = user.user_id, expires_at = %expires_at, "Password reset issued");
    Ok(())
}

pub async fn reset_password(
    users: &dyn UserRepositoryTrait,
    db: &PgPool,
    payload: ResetPasswordRequest,
) -> Result<(), AppError> {
    payload.validate()?;
    let reset = reset_repo::find_reset_by_token(db, &payload.token)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid token".into()))?;

    if reset.is_expired(Utc::now()) {
        reset_repo::delete_reset(db, reset.id).await?;
        return Err(AppError::BadRequest("Token expired".into()));
    }

    let password_hash = hash_password(&payload.new_password)?;
    users
        .update_password(db, reset.user_id, &password_hash)
        .await?;
    reset_repo::delete_reset(db, reset.id).await?;

    tracing::info!(user_id = reset.user_id, "Password reset completed");
    Ok(())
}
