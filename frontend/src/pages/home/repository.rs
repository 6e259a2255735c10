use crate::api::{ApiClient, ApiError, Disaster, TaskRequest, STATUS_ACTIVE};
use std::rc::Rc;

#[derive(Clone)]
pub struct HomeRepository {
    client: Rc<ApiClient>,
}

impl HomeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_active_disasters(&self) -> Result<Vec<Disaster>, ApiError> {
        self.client.list_disasters(Some(STATUS_ACTIVE)).await
    }

    pub async fn fetch_my_requests(&self, user_id: i64) -> Result<Vec<TaskRequest>, ApiError> {
        self.client.get_user_task_requests(user_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn active_disasters_are_requested_by_status() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/disasters").query_param("status", "ACTIVE");
            then.status(200).json_body(serde_json::json!([{
                "disaster_id": 3,
                "name": "Landslide",
                "description": "Road blocked",
                "location": "Munnar",
                "disaster_type": "OTHER",
                "severity": "HIGH",
                "status": "ACTIVE",
                "reported_at": "2026-07-01T08:00:00Z"
            }]));
        });

        let repo = HomeRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let disasters = repo.fetch_active_disasters().await.unwrap();
        assert_eq!(disasters.len(), 1);
        assert!(disasters[0].is_high_severity());
    }
}
