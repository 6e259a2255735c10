use crate::api::{ApiClient, ApiError, ResourceRequest, ResourceRequestView};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminResourceRequestsRepository {
    client: Rc<ApiClient>,
}

impl AdminResourceRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<ResourceRequestView>, ApiError> {
        self.client.get_admin_resource_requests().await
    }

    pub async fn allocate(&self, request_id: i64) -> Result<ResourceRequest, ApiError> {
        self.client.accept_and_allocate(request_id).await
    }

    pub async fn reject(&self, request_id: i64) -> Result<ResourceRequest, ApiError> {
        self.client.reject_resource_request(request_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn allocation_failure_surfaces_stock_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/resource-requests/accept-allocate/4");
            then.status(400).json_body(json!({
                "error": "Insufficient resource quantity available for allocation!",
                "code": "BAD_REQUEST"
            }));
        });

        let repo = AdminResourceRequestsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let err = repo.allocate(4).await.unwrap_err();
        assert!(err.error.starts_with("Insufficient resource quantity"));
    }
}
