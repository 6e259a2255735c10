use crate::api::{ApiClient, ApiError, CreateTaskRequest, TaskRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct SubmitRequestRepository {
    client: Rc<ApiClient>,
}

impl SubmitRequestRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, payload: CreateTaskRequest) -> Result<TaskRequest, ApiError> {
        self.client.submit_task_request(&payload).await
    }

    pub async fn my_requests(&self, user_id: i64) -> Result<Vec<TaskRequest>, ApiError> {
        self.client.get_user_task_requests(user_id).await
    }
}
