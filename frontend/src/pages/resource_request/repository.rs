use crate::api::{
    ApiClient, ApiError, CreateResourceRequest, Resource, ResourceRequest, ResourceRequestView,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResourceRequestRepository {
    client: Rc<ApiClient>,
}

impl ResourceRequestRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        self.client.get_resources().await
    }

    pub async fn fetch_my_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<ResourceRequestView>, ApiError> {
        self.client.get_user_resource_requests(user_id).await
    }

    pub async fn request(
        &self,
        payload: CreateResourceRequest,
    ) -> Result<ResourceRequest, ApiError> {
        self.client.request_resource(&payload).await
    }

    pub async fn cancel(&self, request_id: i64) -> Result<ResourceRequest, ApiError> {
        self.client.cancel_resource_request(request_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    fn repo(server: &MockServer) -> ResourceRequestRepository {
        ResourceRequestRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn cancel_hits_cancel_endpoint() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/resource-requests/cancel/7");
            then.status(200).json_body(serde_json::json!({
                "request_id": 7,
                "user_id": 1,
                "resource_id": 2,
                "location": "Kozhikode",
                "requested_quantity": 10,
                "status": "CANCELLED",
                "request_date": "2026-08-10T09:30:00Z"
            }));
        });

        let cancelled = repo(&server).cancel(7).await.unwrap();
        assert_eq!(cancelled.status, "CANCELLED");
    }

    #[tokio::test]
    async fn over_request_is_reported_by_server() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/resource-requests/request");
            then.status(400).json_body(serde_json::json!({
                "error": "Requested quantity exceeds available stock",
                "code": "BAD_REQUEST"
            }));
        });

        let err = repo(&server)
            .request(CreateResourceRequest {
                resource_id: 2,
                location: "Kozhikode".into(),
                requested_quantity: 5000,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "BAD_REQUEST");
    }
}
