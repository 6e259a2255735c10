use crate::api::{ApiClient, ApiError, VolunteerApplication};
use std::rc::Rc;

#[derive(Clone)]
pub struct VolunteerApplyRepository {
    client: Rc<ApiClient>,
}

impl VolunteerApplyRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn apply(&self, description: String) -> Result<VolunteerApplication, ApiError> {
        self.client.apply_as_volunteer(description).await
    }

    pub async fn my_applications(
        &self,
        user_id: i64,
    ) -> Result<Vec<VolunteerApplication>, ApiError> {
        self.client.get_user_applications(user_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn lists_my_applications() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/volunteer-applications/user/1");
            then.status(200).json_body(serde_json::json!([{
                "application_id": 4,
                "user_id": 1,
                "description": "Trained in first aid",
                "status": "PENDING",
                "application_date": "2026-07-20T12:00:00Z"
            }]));
        });

        let repo = VolunteerApplyRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let apps = repo.my_applications(1).await.unwrap();
        assert_eq!(apps[0].status, "PENDING");
    }
}
