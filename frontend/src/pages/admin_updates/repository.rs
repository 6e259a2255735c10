use crate::api::{ApiClient, ApiError, Disaster, DisasterPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminUpdatesRepository {
    client: Rc<ApiClient>,
}

impl AdminUpdatesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// `status` of `None` lists every disaster.
    pub async fn fetch(&self, status: Option<String>) -> Result<Vec<Disaster>, ApiError> {
        self.client.list_disasters(status.as_deref()).await
    }

    pub async fn save(&self, id: Option<i64>, payload: DisasterPayload) -> Result<Disaster, ApiError> {
        match id {
            Some(id) => self.client.update_disaster(id, &payload).await,
            None => self.client.create_disaster(&payload).await,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_disaster(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn status_filter_is_sent_as_query() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/disasters").query_param("status", "RESOLVED");
            then.status(200).json_body(json!([{
                "disaster_id": 3,
                "name": "Landslide",
                "description": "",
                "location": "Munnar",
                "disaster_type": "OTHER",
                "severity": "MEDIUM",
                "status": "RESOLVED",
                "reported_at": "2025-07-20T00:00:00Z"
            }]));
        });

        let repo = AdminUpdatesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let list = repo.fetch(Some("RESOLVED".into())).await.unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].is_resolved());
    }
}
