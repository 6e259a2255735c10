//! Models for password reset functionality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a password reset token.
pub struct PasswordReset {
    pub id: Uuid,
    pub user_id: i64,
    /// SHA-256 hash of the token that was mailed to the user.
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload for requesting a password reset.
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload for resetting password with a token.
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Invalid token"))]
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let now = Utc::now();
        let reset = PasswordReset {
            id: Uuid::new_v4(),
            user_id: 1,
            token_hash: "abc".into(),
            expires_at: now,
            created_at: now - Duration::minutes(15),
        };
        assert!(reset.is_expired(now));
        assert!(!reset.is_expired(now - Duration::seconds(1)));
    }
}
