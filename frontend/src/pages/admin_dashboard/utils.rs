use crate::api::{
    Disaster, ResourceRequestView, TaskRequest, UserResponse, UserRole, STATUS_ACTIVE,
    STATUS_PENDING,
};
use serde::{Deserialize, Serialize};

pub const LATEST_LIMIT: usize = 5;

/// Loaded as one resource, so it must cross the serialization boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_disasters: usize,
    pub pending_task_requests: usize,
    pub volunteers: usize,
    pub pending_resource_requests: usize,
    pub latest_task_requests: Vec<TaskRequest>,
    pub latest_resource_requests: Vec<ResourceRequestView>,
}

impl DashboardSummary {
    /// Counts are taken over the inputs after filtering by status or role, so
    /// callers may pass unfiltered lists.
    pub fn build(
        disasters: &[Disaster],
        task_requests: Vec<TaskRequest>,
        users: &[UserResponse],
        resource_requests: Vec<ResourceRequestView>,
    ) -> Self {
        let mut pending_tasks: Vec<TaskRequest> = task_requests
            .into_iter()
            .filter(|r| r.status == STATUS_PENDING)
            .collect();
        pending_tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut pending_resources: Vec<ResourceRequestView> = resource_requests
            .into_iter()
            .filter(|r| r.status == STATUS_PENDING)
            .collect();
        pending_resources.sort_by(|a, b| b.request_date.cmp(&a.request_date));

        Self {
            active_disasters: disasters.iter().filter(|d| d.status == STATUS_ACTIVE).count(),
            pending_task_requests: pending_tasks.len(),
            volunteers: users.iter().filter(|u| u.role == UserRole::Volunteer).count(),
            pending_resource_requests: pending_resources.len(),
            latest_task_requests: pending_tasks.into_iter().take(LATEST_LIMIT).collect(),
            latest_resource_requests: pending_resources.into_iter().take(LATEST_LIMIT).collect(),
        }
    }
}
