use super::utils::DashboardSummary;
use crate::api::{ApiClient, ApiError, STATUS_ACTIVE, STATUS_PENDING};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl AdminDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches every list the dashboard counts, failing on the first error.
    pub async fn load_summary(&self) -> Result<DashboardSummary, ApiError> {
        let disasters = self.client.list_disasters(Some(STATUS_ACTIVE)).await?;
        let task_requests = self.client.get_task_requests_by_status(STATUS_PENDING).await?;
        let users = self.client.get_users().await?;
        let resource_requests = self.client.get_admin_resource_requests().await?;
        Ok(DashboardSummary::build(
            &disasters,
            task_requests,
            &users,
            resource_requests,
        ))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn summary_combines_all_sources() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/disasters").query_param("status", "ACTIVE");
            then.status(200).json_body(json!([{
                "disaster_id": 1, "name": "Flood", "description": "", "location": "Thrissur",
                "disaster_type": "FLOOD", "severity": "HIGH", "status": "ACTIVE",
                "reported_at": "2025-08-01T00:00:00Z"
            }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/task-requests/status/PENDING");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([{
                "user_id": 2, "name": "Ravi", "email": "ravi@example.com",
                "phone_number": "", "location": "", "role": "Volunteer",
                "user_status": "active", "created_at": "2025-07-01T00:00:00Z"
            }, {
                "user_id": 1, "name": "Asha", "email": "asha@example.com",
                "phone_number": "", "location": "", "role": "User",
                "user_status": "active", "created_at": "2025-07-01T00:00:00Z"
            }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/resource-requests/admin");
            then.status(200).json_body(json!([]));
        });

        let repo = AdminDashboardRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let summary = repo.load_summary().await.unwrap();
        assert_eq!(summary.active_disasters, 1);
        assert_eq!(summary.volunteers, 1);
        assert_eq!(summary.pending_task_requests, 0);
    }
}
