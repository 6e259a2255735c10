use crate::api::{ApiError, CreateResource, Resource};
use crate::pages::resource_request::utils::parse_quantity;
use crate::utils::validation;

pub const LOW_STOCK_THRESHOLD: i32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub name: String,
    pub resource_type: String,
    pub quantity: String,
}

impl ResourceForm {
    pub fn validate(&self) -> Result<CreateResource, ApiError> {
        validation::require(&self.name, "Name")?;
        validation::require(&self.resource_type, "Type")?;
        let available_quantity = match self.quantity.trim().parse::<i32>() {
            Ok(value) if value >= 0 => value,
            _ => return Err(ApiError::validation("Quantity cannot be negative")),
        };
        Ok(CreateResource {
            name: self.name.trim().to_string(),
            resource_type: self.resource_type.trim().to_string(),
            available_quantity,
        })
    }
}

pub fn replenish_amount(raw: &str) -> Result<i32, ApiError> {
    parse_quantity(raw).map_err(|_| ApiError::validation("Quantity to add must be positive"))
}

pub fn is_low_stock(resource: &Resource) -> bool {
    resource.available_quantity < LOW_STOCK_THRESHOLD
}

pub fn sort_by_name(mut resources: Vec<Resource>) -> Vec<Resource> {
    resources.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    resources
}
