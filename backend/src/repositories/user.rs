//! User repository.
//!
//! Accounts are looked up by id for token checks and by email (case-insensitive)
//! for sign-in and registration.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::{User, UserRole};
use crate::repositories::common::is_unique_violation;

const TABLE_NAME: &str = "users";
const SELECT_COLUMNS: &str =
    "user_id, name, email, password_hash, phone_number, location, role, user_status, created_at";

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email is already registered!";

/// Fields required to insert an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub location: String,
    pub role: UserRole,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// All accounts ordered by id.
    async fn find_all(&self, db: &PgPool) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts an account. A taken email yields `Conflict`.
    async fn create(&self, db: &PgPool, user: &NewUser) -> Result<User, AppError>;

    /// Persists every editable column of `user`.
    async fn update(&self, db: &PgPool, user: &User) -> Result<User, AppError>;

    async fn update_password(
        &self,
        db: &PgPool,
        id: i64,
        password_hash: &str,
    ) -> Result<(), AppError>;

    /// Returns `false` when no row matched.
    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }
}

fn map_duplicate_email(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into())
    } else {
        err.into()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(&self, db: &PgPool) -> Result<Vec<User>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY user_id",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, User>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE LOWER(email) = LOWER($1)",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn create(&self, db: &PgPool, user: &NewUser) -> Result<User, AppError> {
        let query = format!(
            "INSERT INTO {} (name, email, password_hash, phone_number, location, role, user_status) \
             VALUES ($1, $2, $3, $4, $5, $6, 'active') RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone_number)
            .bind(&user.location)
            .bind(user.role.as_str())
            .fetch_one(db)
            .await
            .map_err(map_duplicate_email)
    }

    async fn update(&self, db: &PgPool, user: &User) -> Result<User, AppError> {
        let query = format!(
            "UPDATE {} SET name = $2, email = $3, phone_number = $4, location = $5, \
             role = $6, user_status = $7 WHERE user_id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user.user_id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(&user.location)
            .bind(user.role.as_str())
            .bind(user.user_status.as_str())
            .fetch_one(db)
            .await
            .map_err(map_duplicate_email)
    }

    async fn update_password(
        &self,
        db: &PgPool,
        id: i64,
        password_hash: &str,
    ) -> Result<(), AppError> {
        let query = format!(
            "UPDATE {} SET password_hash = $2 WHERE user_id = $1",
            TABLE_NAME
        );
        sqlx::query(&query)
            .bind(id)
            .bind(password_hash)
            .execute(db)
            .await?;
        Ok(())
    }

    async fn delete(&self, db: &PgPool, id: i64) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE user_id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}
