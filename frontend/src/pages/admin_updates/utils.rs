use crate::api::{ApiError, Disaster, DisasterPayload, DISASTER_STATUSES, DISASTER_TYPES, SEVERITIES};
use crate::utils::{
    time::{parse_datetime_local_input, to_datetime_local_input},
    validation,
};

pub const STATUS_FILTER_ALL: &str = "all";
pub const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisasterForm {
    pub editing: Option<i64>,
    pub name: String,
    pub description: String,
    pub location: String,
    pub disaster_type: String,
    pub severity: String,
    pub status: String,
    /// Raw `datetime-local` value; blank lets the server stamp the report time.
    pub reported_at: String,
}

impl Default for DisasterForm {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            location: String::new(),
            disaster_type: DISASTER_TYPES[0].to_string(),
            severity: SEVERITIES[1].to_string(),
            status: DISASTER_STATUSES[0].to_string(),
            reported_at: String::new(),
        }
    }
}

impl From<&Disaster> for DisasterForm {
    fn from(d: &Disaster) -> Self {
        Self {
            editing: Some(d.disaster_id),
            name: d.name.clone(),
            description: d.description.clone(),
            location: d.location.clone(),
            disaster_type: d.disaster_type.clone(),
            severity: d.severity.clone(),
            status: d.status.clone(),
            reported_at: to_datetime_local_input(&d.reported_at),
        }
    }
}

fn one_of(value: &str, allowed: &[&str], field: &str) -> Result<String, ApiError> {
    let upper = value.trim().to_ascii_uppercase();
    if allowed.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(ApiError::validation(format!("Please choose a {}", field)))
    }
}

impl DisasterForm {
    pub fn validate(&self) -> Result<DisasterPayload, ApiError> {
        validation::require(&self.name, "Name")?;
        validation::require(&self.location, "Location")?;
        validation::max_chars(self.description.trim(), MAX_DESCRIPTION_LEN, "Description")?;
        let reported_at = if self.reported_at.trim().is_empty() {
            None
        } else {
            Some(
                parse_datetime_local_input(&self.reported_at)
                    .ok_or_else(|| ApiError::validation("Reported time is not a valid date"))?,
            )
        };
        Ok(DisasterPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            disaster_type: one_of(&self.disaster_type, DISASTER_TYPES, "disaster type")?,
            severity: one_of(&self.severity, SEVERITIES, "severity")?,
            status: one_of(&self.status, DISASTER_STATUSES, "status")?,
            reported_at,
        })
    }
}

/// Maps the status filter select to the list query parameter.
pub fn status_query(filter: &str) -> Option<String> {
    if filter == STATUS_FILTER_ALL || filter.trim().is_empty() {
        None
    } else {
        Some(filter.to_string())
    }
}
