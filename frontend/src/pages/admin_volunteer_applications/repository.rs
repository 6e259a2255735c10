use crate::api::{ApiClient, ApiError, VolunteerApplication, VolunteerApplicationView};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminApplicationsRepository {
    client: Rc<ApiClient>,
}

impl AdminApplicationsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<VolunteerApplicationView>, ApiError> {
        self.client.get_applications().await
    }

    pub async fn accept(&self, application_id: i64) -> Result<VolunteerApplication, ApiError> {
        self.client.accept_application(application_id).await
    }

    pub async fn reject(&self, application_id: i64) -> Result<VolunteerApplication, ApiError> {
        self.client.reject_application(application_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn accept_returns_approved_application() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/volunteer-applications/6/accept");
            then.status(200).json_body(json!({
                "application_id": 6,
                "user_id": 1,
                "description": "I can drive",
                "status": "APPROVED",
                "application_date": "2025-08-01T10:00:00Z"
            }));
        });

        let repo = AdminApplicationsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let application = repo.accept(6).await.unwrap();
        assert_eq!(application.status, "APPROVED");
    }
}
