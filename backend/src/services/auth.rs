//! Sign-in and registration rules.

use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginRequest, LoginResponse, RegisterUser, User, UserRole},
    repositories::user::{NewUser, UserRepositoryTrait, DUPLICATE_EMAIL_MESSAGE},
    utils::{jwt::create_access_token, password::hash_password, password::verify_password},
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";
pub const BLOCKED_USER_MESSAGE: &str = "This user is blocked. Please contact support.";

pub async fn login(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    config: &Config,
    payload: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let user = repo
        .find_by_email(db, &payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into()))?;

    let password_ok = verify_password(&payload.password, &user.password_hash)
        .map_err(AppError::InternalServerError)?;
    if !password_ok {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into()));
    }

    if !user.is_active() {
        return Err(AppError::Forbidden(BLOCKED_USER_MESSAGE.into()));
    }

    let access_token = create_access_token(
        user.user_id,
        user.email.clone(),
        user.role.to_string(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )?;

    tracing::info!(user_id = user.user_id, role = %user.role, "User signed in");

    Ok(LoginResponse {
        success: true,
        message: "Login successful".into(),
        user_id: user.user_id,
        role: user.role,
        name: user.name,
        email: user.email,
        user_status: user.user_status,
        access_token,
    })
}

/// Creates a citizen account. Self-registration never grants elevated roles.
pub async fn register(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    payload: RegisterUser,
) -> Result<User, AppError> {
    payload.validate()?;

    let email = payload.email.trim().to_string();
    if repo.find_by_email(db, &email).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = repo
        .create(
            db,
            &NewUser {
                name: payload.name.trim().to_string(),
                email,
                password_hash,
                phone_number: payload.phone_number.trim().to_string(),
                location: payload.location.trim().to_string(),
                role: UserRole::User,
            },
        )
        .await?;

    tracing::info!(user_id = user.user_id, "User registered");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{sample_user, UserStatus};
    use crate::repositories::user::MockUserRepositoryTrait;
    use crate::services::test_support::{lazy_pool, test_config};

    fn user_with_password(password: &str, status: UserStatus) -> User {
        let mut user = sample_user(5, UserRole::Volunteer);
        user.password_hash = hash_password(password).unwrap();
        user.user_status = status;
        user
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "user5@example.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_returns_token_and_profile() {
        let mut repo = MockUserRepositoryTrait::new();
        let user = user_with_password("correct horse", UserStatus::Active);
        repo.expect_find_by_email()
            .returning(move |_, _| Ok(Some(user.clone())));

        let config = test_config();
        let response = login(&repo, &lazy_pool(), &config, credentials("correct horse"))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.role, UserRole::Volunteer);
        let claims =
            crate::utils::jwt::verify_access_token(&response.access_token, &config.jwt_secret)
                .unwrap();
        assert_eq!(claims.user_id().unwrap(), 5);
        assert_eq!(claims.role, "Volunteer");
    }

    #[tokio::test]
    async fn login_rejects_unknown_email_and_wrong_password_alike() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email().returning(|_, _| Ok(None));
        let err = login(&repo, &lazy_pool(), &test_config(), credentials("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(ref m) if m == INVALID_CREDENTIALS_MESSAGE));

        let mut repo = MockUserRepositoryTrait::new();
        let user = user_with_password("correct horse", UserStatus::Active);
        repo.expect_find_by_email()
            .returning(move |_, _| Ok(Some(user.clone())));
        let err = login(&repo, &lazy_pool(), &test_config(), credentials("wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(ref m) if m == INVALID_CREDENTIALS_MESSAGE));
    }

    #[tokio::test]
    async fn blocked_user_gets_forbidden_after_password_check() {
        let mut repo = MockUserRepositoryTrait::new();
        let user = user_with_password("correct horse", UserStatus::Blocked);
        repo.expect_find_by_email()
            .returning(move |_, _| Ok(Some(user.clone())));
        let err = login(&repo, &lazy_pool(), &test_config(), credentials("correct horse"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(ref m) if m == BLOCKED_USER_MESSAGE));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email()
            .returning(|_, _| Ok(Some(sample_user(1, UserRole::User))));
        repo.expect_create().never();

        let payload = RegisterUser {
            name: "Asha".into(),
            email: "user1@example.com".into(),
            password: "longenough".into(),
            phone_number: String::new(),
            location: String::new(),
        };
        let err = register(&repo, &lazy_pool(), payload).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == DUPLICATE_EMAIL_MESSAGE));
    }

    #[tokio::test]
    async fn register_always_creates_plain_users() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email().returning(|_, _| Ok(None));
        repo.expect_create()
            .withf(|_, new_user| {
                new_user.role == UserRole::User
                    && new_user.email == "asha@example.com"
                    && new_user.password_hash != "longenough"
            })
            .returning(|_, _| Ok(sample_user(10, UserRole::User)));

        let payload = RegisterUser {
            name: " Asha ".into(),
            email: "asha@example.com".into(),
            password: "longenough".into(),
            phone_number: "555".into(),
            location: "Kochi".into(),
        };
        let user = register(&repo, &lazy_pool(), payload).await.unwrap();
        assert_eq!(user.user_id, 10);
    }
}
