//! Models that represent portal accounts, their roles, and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
/// Database representation of a portal account.
pub struct User {
    /// Unique identifier for the user.
    pub user_id: i64,
    /// Display name shown in dashboards.
    pub name: String,
    /// Login identifier; unique across accounts.
    pub email: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    pub phone_number: String,
    pub location: String,
    /// Role describing which part of the portal the user may reach.
    pub role: UserRole,
    /// Blocked accounts cannot sign in or use an issued token.
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
/// Supported portal roles, stored with their PascalCase names.
pub enum UserRole {
    /// Citizen account.
    #[default]
    User,
    /// Approved volunteer who can accept tasks.
    Volunteer,
    /// Administrator with full access.
    Admin,
}

text_enum!(UserRole {
    User => "User",
    Volunteer => "Volunteer",
    Admin => "Admin",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[schema(rename_all = "lowercase")]
/// Account standing.
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

text_enum!(UserStatus {
    Active => "active",
    Blocked => "blocked",
});

impl User {
    /// Returns `true` when the user holds the `Admin` role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Returns `true` when the user holds the `Volunteer` role.
    pub fn is_volunteer(&self) -> bool {
        self.role == UserRole::Volunteer
    }

    /// Volunteers and administrators may use volunteer routes.
    pub fn can_act_as_volunteer(&self) -> bool {
        matches!(self.role, UserRole::Volunteer | UserRole::Admin)
    }

    pub fn is_active(&self) -> bool {
        self.user_status == UserStatus::Active
    }

    /// Records owned by `owner_id` are visible to their owner and to admins.
    pub fn can_access(&self, owner_id: i64) -> bool {
        self.is_admin() || self.user_id == owner_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload submitted from the public registration form.
pub struct RegisterUser {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone_number: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
/// Partial update of an account. Role and status changes are admin-only.
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub role: Option<UserRole>,
    pub user_status: Option<UserStatus>,
}

impl UpdateUser {
    pub fn touches_privileged_fields(&self) -> bool {
        self.role.is_some() || self.user_status.is_some()
    }

    /// Applies the present fields onto `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            user.email = email.trim().to_string();
        }
        if let Some(phone) = self.phone_number {
            user.phone_number = phone.trim().to_string();
        }
        if let Some(location) = self.location {
            user.location = location.trim().to_string();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.user_status {
            user.user_status = status;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to sign in.
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Session bootstrap data returned after a successful sign-in.
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub user_status: UserStatus,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub role: UserRole,
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            location: user.location,
            role: user.role,
            user_status: user.user_status,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_user(user_id: i64, role: UserRole) -> User {
    User {
        user_id,
        name: format!("User {}", user_id),
        email: format!("user{}@example.com", user_id),
        password_hash: "hash".into(),
        phone_number: "555-0100".into(),
        location: "Kochi".into(),
        role,
        user_status: UserStatus::Active,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn user_role_serde_accepts_any_casing_and_emits_pascal_case() {
        let v: UserRole = serde_json::from_str("\"volunteer\"").unwrap();
        let a: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        let u: UserRole = serde_json::from_str("\" User \"").unwrap();
        assert_eq!(v, UserRole::Volunteer);
        assert_eq!(a, UserRole::Admin);
        assert_eq!(u, UserRole::User);

        let sv = serde_json::to_value(UserRole::Volunteer).unwrap();
        assert_eq!(sv, Value::String("Volunteer".into()));
        assert!(serde_json::from_str::<UserRole>("\"guest\"").is_err());
    }

    #[test]
    fn role_predicates_cover_volunteer_routes() {
        assert!(sample_user(1, UserRole::Admin).can_act_as_volunteer());
        assert!(sample_user(1, UserRole::Volunteer).can_act_as_volunteer());
        assert!(!sample_user(1, UserRole::User).can_act_as_volunteer());
    }

    #[test]
    fn can_access_allows_owner_and_admin_only() {
        let owner = sample_user(7, UserRole::User);
        let other = sample_user(8, UserRole::Volunteer);
        let admin = sample_user(9, UserRole::Admin);
        assert!(owner.can_access(7));
        assert!(!other.can_access(7));
        assert!(admin.can_access(7));
    }

    #[test]
    fn update_user_apply_only_touches_present_fields() {
        let mut user = sample_user(3, UserRole::User);
        let update = UpdateUser {
            name: Some("  Asha  ".into()),
            location: Some("Thrissur".into()),
            ..UpdateUser::default()
        };
        assert!(!update.touches_privileged_fields());
        update.apply(&mut user);
        assert_eq!(user.name, "Asha");
        assert_eq!(user.location, "Thrissur");
        assert_eq!(user.email, "user3@example.com");
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn update_user_flags_role_and_status_changes() {
        let update = UpdateUser {
            user_status: Some(UserStatus::Blocked),
            ..UpdateUser::default()
        };
        assert!(update.touches_privileged_fields());
    }

    #[test]
    fn register_payload_validation_rejects_bad_email_and_short_password() {
        let payload = RegisterUser {
            name: "Asha".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            phone_number: String::new(),
            location: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn user_response_omits_password_hash() {
        let resp: UserResponse = sample_user(4, UserRole::Volunteer).into();
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "Volunteer");
        assert_eq!(json["user_status"], "active");
    }
}
