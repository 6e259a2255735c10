//! Relief inventory items (food, water, medical kits, ...).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resource {
    pub resource_id: i64,
    pub name: String,
    pub resource_type: String,
    pub available_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResource {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Type is required"))]
    pub resource_type: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub available_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplenishPayload {
    #[validate(range(min = 1, message = "Quantity to add must be positive"))]
    pub quantity_to_add: i32,
}
