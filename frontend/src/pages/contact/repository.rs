use crate::api::{ApiClient, ApiError, CreateFeedback, Feedback};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactRepository {
    client: Rc<ApiClient>,
}

impl ContactRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send(&self, payload: CreateFeedback) -> Result<Feedback, ApiError> {
        self.client.submit_feedback(&payload).await
    }
}
