use super::{
    client::ApiClient,
    types::{ApiError, CreateTaskRequest, Task, TaskRequest},
};
use serde_json::json;

impl ApiClient {
    pub async fn submit_task_request(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<TaskRequest, ApiError> {
        self.post_json("/task-requests", request).await
    }

    pub async fn get_user_task_requests(&self, user_id: i64) -> Result<Vec<TaskRequest>, ApiError> {
        self.get_json(&format!("/task-requests/user/{}", user_id))
            .await
    }

    pub async fn get_task_requests_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<TaskRequest>, ApiError> {
        self.get_json(&format!("/task-requests/status/{}", status))
            .await
    }

    pub async fn approve_task_request(&self, request_id: i64) -> Result<Task, ApiError> {
        self.post_json(&format!("/task-requests/{}/approve", request_id), &json!({}))
            .await
    }

    pub async fn reject_task_request(&self, request_id: i64) -> Result<TaskRequest, ApiError> {
        self.post_json(&format!("/task-requests/{}/reject", request_id), &json!({}))
            .await
    }

    pub async fn delete_task_request(&self, request_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/task-requests/{}", request_id)).await
    }
}
