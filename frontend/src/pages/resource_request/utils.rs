use crate::api::{ApiError, CreateResourceRequest, Resource, ResourceRequestView, STATUS_PENDING};
use crate::utils::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRequestForm {
    pub resource_id: String,
    pub quantity: String,
    pub location: String,
}

impl ResourceRequestForm {
    /// Checks the chosen resource exists and the quantity is within its stock.
    pub fn validate(&self, resources: &[Resource]) -> Result<CreateResourceRequest, ApiError> {
        let resource_id: i64 = self
            .resource_id
            .trim()
            .parse()
            .map_err(|_| ApiError::validation("Please choose a resource"))?;
        let resource = resources
            .iter()
            .find(|r| r.resource_id == resource_id)
            .ok_or_else(|| ApiError::validation("Please choose a resource"))?;
        let quantity = parse_quantity(&self.quantity)?;
        if quantity > resource.available_quantity {
            return Err(ApiError::validation(format!(
                "Only {} {} available",
                resource.available_quantity, resource.name
            )));
        }
        validation::require(&self.location, "Location")?;
        Ok(CreateResourceRequest {
            resource_id,
            location: self.location.trim().to_string(),
            requested_quantity: quantity,
        })
    }
}

pub fn parse_quantity(raw: &str) -> Result<i32, ApiError> {
    match raw.trim().parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ApiError::validation("Quantity must be a positive number")),
    }
}

pub fn can_cancel(request: &ResourceRequestView) -> bool {
    request.status == STATUS_PENDING
}

pub fn newest_first(mut requests: Vec<ResourceRequestView>) -> Vec<ResourceRequestView> {
    requests.sort_by(|a, b| b.request_id.cmp(&a.request_id));
    requests
}

#[cfg(test)]
pub(crate) fn request_view(id: i64, status: &str) -> ResourceRequestView {
    ResourceRequestView {
        request_id: id,
        user_id: 1,
        user_name: "Asha".into(),
        user_email: "asha@example.com".into(),
        resource_id: 1,
        resource_name: "Water".into(),
        requested_quantity: 4,
        status: status.into(),
        location: "Kannur".into(),
        request_date: chrono::Utc::now(),
    }
}
