use crate::api::{ApiClient, ApiError, CreateResource, Resource};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminResourcesRepository {
    client: Rc<ApiClient>,
}

impl AdminResourcesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Resource>, ApiError> {
        self.client.get_resources().await
    }

    pub async fn create(&self, payload: CreateResource) -> Result<Resource, ApiError> {
        self.client.create_resource(&payload).await
    }

    pub async fn replenish(&self, resource_id: i64, quantity: i32) -> Result<Resource, ApiError> {
        self.client.replenish_resource(resource_id, quantity).await
    }

    pub async fn delete(&self, resource_id: i64) -> Result<(), ApiError> {
        self.client.delete_resource(resource_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn replenish_returns_new_stock() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/resource-requests/replenish/3");
            then.status(200).json_body(json!({
                "resource_id": 3,
                "name": "Blankets",
                "resource_type": "Shelter",
                "available_quantity": 140
            }));
        });

        let repo = AdminResourcesRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let resource = repo.replenish(3, 40).await.unwrap();
        assert_eq!(resource.available_quantity, 140);
    }
}
