use super::{
    client::ApiClient,
    types::{
        ApiError, CreateResource, CreateResourceRequest, ReplenishPayload, Resource,
        ResourceRequest, ResourceRequestView,
    },
};
use serde_json::json;

const PREFIX: &str = "/resource-requests";

impl ApiClient {
    pub async fn get_resources(&self) -> Result<Vec<Resource>, ApiError> {
        self.get_json(&format!("{}/resources", PREFIX)).await
    }

    pub async fn create_resource(&self, payload: &CreateResource) -> Result<Resource, ApiError> {
        self.post_json(&format!("{}/resources", PREFIX), payload)
            .await
    }

    pub async fn delete_resource(&self, resource_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("{}/resources/{}", PREFIX, resource_id))
            .await
    }

    pub async fn replenish_resource(
        &self,
        resource_id: i64,
        quantity_to_add: i32,
    ) -> Result<Resource, ApiError> {
        self.put_json(
            &format!("{}/replenish/{}", PREFIX, resource_id),
            &ReplenishPayload { quantity_to_add },
        )
        .await
    }

    pub async fn request_resource(
        &self,
        payload: &CreateResourceRequest,
    ) -> Result<ResourceRequest, ApiError> {
        self.post_json(&format!("{}/request", PREFIX), payload).await
    }

    pub async fn get_user_resource_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<ResourceRequestView>, ApiError> {
        self.get_json(&format!("{}/user/{}", PREFIX, user_id)).await
    }

    pub async fn get_admin_resource_requests(&self) -> Result<Vec<ResourceRequestView>, ApiError> {
        self.get_json(&format!("{}/admin", PREFIX)).await
    }

    pub async fn accept_and_allocate(&self, request_id: i64) -> Result<ResourceRequest, ApiError> {
        self.put_json(&format!("{}/accept-allocate/{}", PREFIX, request_id), &json!({}))
            .await
    }

    pub async fn reject_resource_request(
        &self,
        request_id: i64,
    ) -> Result<ResourceRequest, ApiError> {
        self.put_json(&format!("{}/reject/{}", PREFIX, request_id), &json!({}))
            .await
    }

    pub async fn cancel_resource_request(
        &self,
        request_id: i64,
    ) -> Result<ResourceRequest, ApiError> {
        self.put_json(&format!("{}/cancel/{}", PREFIX, request_id), &json!({}))
            .await
    }
}
