//! Disaster records maintained by administrators and shown on public update boards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Disaster {
    pub disaster_id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub disaster_type: DisasterType,
    pub severity: Severity,
    pub status: DisasterStatus,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum DisasterType {
    Flood,
    Earthquake,
    Fire,
    Cyclone,
    Other,
}

text_enum!(DisasterType {
    Flood => "FLOOD",
    Earthquake => "EARTHQUAKE",
    Fire => "FIRE",
    Cyclone => "CYCLONE",
    Other => "OTHER",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

text_enum!(Severity {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum DisasterStatus {
    #[default]
    Active,
    Inactive,
    Resolved,
}

text_enum!(DisasterStatus {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Resolved => "RESOLVED",
});

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload used both to report a new disaster and to replace an existing one.
pub struct DisasterPayload {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,
    pub disaster_type: DisasterType,
    pub severity: Severity,
    #[serde(default)]
    pub status: DisasterStatus,
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct DisasterListQuery {
    /// Optional status filter, e.g. `?status=ACTIVE`.
    pub status: Option<String>,
}
