//! Account reads and edits with owner/admin checks.

use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{UpdateUser, User},
    repositories::user::UserRepositoryTrait,
};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub fn ensure_can_access(actor: &User, owner_id: i64) -> Result<(), AppError> {
    if actor.can_access(owner_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Forbidden".into()))
    }
}

pub async fn require_user(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    user_id: i64,
) -> Result<User, AppError> {
    repo.find_by_id(db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.into()))
}

pub async fn get_user(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    actor: &User,
    user_id: i64,
) -> Result<User, AppError> {
    ensure_can_access(actor, user_id)?;
    require_user(repo, db, user_id).await
}

pub async fn update_user(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    actor: &User,
    user_id: i64,
    payload: UpdateUser,
) -> Result<User, AppError> {
    ensure_can_access(actor, user_id)?;
    if payload.touches_privileged_fields() && !actor.is_admin() {
        return Err(AppError::Forbidden(
            "Only administrators can change role or status".into(),
        ));
    }
    payload.validate()?;

    let mut user = require_user(repo, db, user_id).await?;
    payload.apply(&mut user);
    let updated = repo.update(db, &user).await?;

    tracing::info!(
        user_id = updated.user_id,
        actor_id = actor.user_id,
        role = %updated.role,
        user_status = %updated.user_status,
        "User updated"
    );
    Ok(updated)
}

pub async fn delete_user(
    repo: &dyn UserRepositoryTrait,
    db: &PgPool,
    user_id: i64,
) -> Result<(), AppError> {
    if repo.delete(db, user_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(USER_NOT_FOUND_MESSAGE.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{sample_user, UserRole, UserStatus};
    use crate::repositories::user::MockUserRepositoryTrait;
    use crate::services::test_support::lazy_pool;

    #[tokio::test]
    async fn other_users_profiles_are_forbidden() {
        let repo = MockUserRepositoryTrait::new();
        let actor = sample_user(1, UserRole::Volunteer);
        let err = get_user(&repo, &lazy_pool(), &actor, 2).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn non_admin_cannot_change_role() {
        let repo = MockUserRepositoryTrait::new();
        let actor = sample_user(1, UserRole::User);
        let payload = UpdateUser {
            role: Some(UserRole::Admin),
            ..UpdateUser::default()
        };
        let err = update_user(&repo, &lazy_pool(), &actor, 1, payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_can_block_a_volunteer() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_id()
            .returning(|_, id| Ok(Some(sample_user(id, UserRole::Volunteer))));
        repo.expect_update()
            .withf(|_, user| user.user_status == UserStatus::Blocked)
            .returning(|_, user| Ok(user.clone()));

        let admin = sample_user(9, UserRole::Admin);
        let payload = UpdateUser {
            user_status: Some(UserStatus::Blocked),
            ..UpdateUser::default()
        };
        let updated = update_user(&repo, &lazy_pool(), &admin, 3, payload)
            .await
            .unwrap();
        assert_eq!(updated.user_id, 3);
        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn deleting_missing_user_is_not_found() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_delete().returning(|_, _| Ok(false));
        let err = delete_user(&repo, &lazy_pool(), 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
