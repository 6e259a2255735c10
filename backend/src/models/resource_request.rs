//! Citizen requests for inventory and the allocation rules applied by administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::InvalidTransition;

pub const INSUFFICIENT_STOCK_MESSAGE: &str =
    "Insufficient resource quantity available for allocation!";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResourceRequest {
    pub request_id: i64,
    pub user_id: i64,
    pub resource_id: i64,
    pub location: String,
    pub requested_quantity: i32,
    pub status: ResourceRequestStatus,
    pub request_date: DateTime<Utc>,
}

/// Listing row joined with requester and resource names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResourceRequestView {
    pub request_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub resource_id: i64,
    pub resource_name: String,
    pub requested_quantity: i32,
    pub status: ResourceRequestStatus,
    pub location: String,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[schema(rename_all = "UPPERCASE")]
pub enum ResourceRequestStatus {
    #[default]
    Pending,
    Approved,
    Accepted,
    Allocated,
    Rejected,
    Cancelled,
}

text_enum!(ResourceRequestStatus {
    Pending => "PENDING",
    Approved => "APPROVED",
    Accepted => "ACCEPTED",
    Allocated => "ALLOCATED",
    Rejected => "REJECTED",
    Cancelled => "CANCELLED",
});

impl ResourceRequestStatus {
    /// Requests still waiting on an allocation decision.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            ResourceRequestStatus::Pending | ResourceRequestStatus::Accepted
        )
    }

    pub fn reject(self) -> Result<ResourceRequestStatus, InvalidTransition> {
        self.close_as(ResourceRequestStatus::Rejected, self.is_open())
    }

    pub fn cancel(self) -> Result<ResourceRequestStatus, InvalidTransition> {
        self.close_as(
            ResourceRequestStatus::Cancelled,
            self == ResourceRequestStatus::Pending,
        )
    }

    fn close_as(
        self,
        next: ResourceRequestStatus,
        allowed: bool,
    ) -> Result<ResourceRequestStatus, InvalidTransition> {
        if allowed {
            Ok(next)
        } else {
            Err(InvalidTransition {
                entity: "resource request",
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
    #[error("Insufficient resource quantity available for allocation!")]
    InsufficientStock { available: i32, requested: i32 },
}

/// Decides whether an open request can be served from `available` stock and
/// returns the stock left after allocation.
pub fn plan_allocation(
    status: ResourceRequestStatus,
    available: i32,
    requested: i32,
) -> Result<i32, AllocationError> {
    if !status.is_open() {
        return Err(InvalidTransition {
            entity: "resource request",
            from: status.as_str(),
            to: ResourceRequestStatus::Allocated.as_str(),
        }
        .into());
    }
    if available < requested {
        return Err(AllocationError::InsufficientStock {
            available,
            requested,
        });
    }
    Ok(available - requested)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResourceRequest {
    pub resource_id: i64,
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,
    #[validate(range(min = 1, message = "Requested quantity must be positive"))]
    pub requested_quantity: i32,
}
