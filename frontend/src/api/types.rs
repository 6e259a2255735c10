use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";
pub const STATUS_ACCEPTED: &str = "ACCEPTED";
pub const STATUS_ALLOCATED: &str = "ALLOCATED";
pub const STATUS_CANCELLED: &str = "CANCELLED";
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_INACTIVE: &str = "INACTIVE";
pub const STATUS_RESOLVED: &str = "RESOLVED";
pub const SEVERITY_HIGH: &str = "HIGH";

pub const DISASTER_TYPES: &[&str] = &["FLOOD", "EARTHQUAKE", "FIRE", "CYCLONE", "OTHER"];
pub const SEVERITIES: &[&str] = &["LOW", "MEDIUM", "HIGH"];
pub const DISASTER_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_RESOLVED];
pub const NOTIFICATION_TYPES: &[&str] = &["Emergency", "Important", "Information"];
pub const NOTIFICATION_TARGETS: &[&str] = &["All", "User", "Volunteer", "Admin"];
pub const FEEDBACK_STATUSES: &[&str] = &["unread", "read", "flagged"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    User,
    Volunteer,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Volunteer, UserRole::Admin];

    /// Accepts any casing and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(UserRole::User),
            "volunteer" => Some(UserRole::Volunteer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Volunteer => "Volunteer",
            UserRole::Admin => "Admin",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::User => "/home",
            UserRole::Volunteer => "/volunteer/home",
            UserRole::Admin => "/admin",
        }
    }

    pub fn can_act_as_volunteer(&self) -> bool {
        matches!(self, UserRole::Volunteer | UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        UserRole::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {}", raw)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Blocked,
            UserStatus::Blocked => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
    /// Kept as text so an unexpected role can be reported instead of failing to parse.
    pub role: String,
    pub name: String,
    pub email: String,
    pub user_status: UserStatus,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub location: String,
    pub role: UserRole,
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub disaster_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub disaster_type: String,
    pub severity: String,
    pub status: String,
    pub reported_at: DateTime<Utc>,
}

impl Disaster {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_ACTIVE)
    }

    pub fn is_resolved(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_RESOLVED)
    }

    pub fn is_high_severity(&self) -> bool {
        self.severity.eq_ignore_ascii_case(SEVERITY_HIGH)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterPayload {
    pub name: String,
    pub description: String,
    pub location: String,
    pub disaster_type: String,
    pub severity: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub request_id: i64,
    pub user_id: i64,
    pub request_title: String,
    pub request_description: String,
    pub location: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub request_title: String,
    pub request_description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub request_id: i64,
    pub volunteer_id: Option<i64>,
    pub photo: String,
    pub status: String,
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

/// Task joined with its originating request and the assigned volunteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetail {
    pub task_id: i64,
    pub request_id: i64,
    pub volunteer_id: Option<i64>,
    pub volunteer_name: Option<String>,
    pub photo: String,
    pub status: String,
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub request_title: String,
    pub request_description: String,
    pub location: String,
    pub requester_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemarksPayload {
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemarksResponse {
    pub volunteer_remarks: Option<String>,
    pub admin_remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: i64,
    pub name: String,
    pub resource_type: String,
    pub available_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResource {
    pub name: String,
    pub resource_type: String,
    pub available_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishPayload {
    pub quantity_to_add: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub request_id: i64,
    pub user_id: i64,
    pub resource_id: i64,
    pub location: String,
    pub requested_quantity: i32,
    pub status: String,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequestView {
    pub request_id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub resource_id: i64,
    pub resource_name: String,
    pub requested_quantity: i32,
    pub status: String,
    pub location: String,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub resource_id: i64,
    pub location: String,
    pub requested_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub application_id: i64,
    pub user_id: i64,
    pub description: String,
    pub status: String,
    pub application_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplicationView {
    pub application_id: i64,
    pub user_id: i64,
    pub description: String,
    pub status: String,
    pub application_date: DateTime<Utc>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub target_role: String,
    pub scheduled_for: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub target_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFeedback {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackStatusPayload {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_role_parses_any_casing_and_serializes_pascal_case() {
        assert_eq!(UserRole::parse(" volunteer "), Some(UserRole::Volunteer));
        assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("guest"), None);

        let role: UserRole = serde_json::from_value(json!("user")).unwrap();
        assert_eq!(role, UserRole::User);
        assert_eq!(serde_json::to_value(UserRole::Volunteer).unwrap(), json!("Volunteer"));
    }

    #[test]
    fn role_home_paths() {
        assert_eq!(UserRole::Admin.home_path(), "/admin");
        assert_eq!(UserRole::Volunteer.home_path(), "/volunteer/home");
        assert_eq!(UserRole::User.home_path(), "/home");
    }

    #[test]
    fn update_user_omits_unset_fields() {
        let update = UpdateUser {
            user_status: Some(UserStatus::Blocked),
            ..UpdateUser::default()
        };
        let v = serde_json::to_value(&update).unwrap();
        assert_eq!(v, json!({ "user_status": "blocked" }));
    }

    #[test]
    fn login_response_keeps_unknown_role_text() {
        let raw = json!({
            "success": true,
            "message": "Login successful",
            "user_id": 4,
            "role": "Superhero",
            "name": "Asha",
            "email": "asha@example.com",
            "user_status": "active",
            "access_token": "jwt"
        });
        let parsed: LoginResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.role, "Superhero");
        assert_eq!(parsed.user_status, UserStatus::Active);
    }

    #[test]
    fn api_error_deserializes_backend_body() {
        let err: ApiError = serde_json::from_value(json!({
            "error": "Task is already assigned to a volunteer",
            "code": "CONFLICT"
        }))
        .unwrap();
        assert_eq!(err.to_string(), "Task is already assigned to a volunteer");
        assert!(err.details.is_none());
        let text: String = err.into();
        assert_eq!(text, "Task is already assigned to a volunteer");
    }

    #[test]
    fn status_toggle_flips_between_active_and_blocked() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Blocked);
        assert_eq!(UserStatus::Blocked.toggled(), UserStatus::Active);
    }
}
