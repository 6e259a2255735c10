use crate::api::{ApiClient, ApiError, Feedback};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminFeedbackRepository {
    client: Rc<ApiClient>,
}

impl AdminFeedbackRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Feedback>, ApiError> {
        self.client.get_feedback().await
    }

    pub async fn set_status(&self, id: i64, status: &str) -> Result<Feedback, ApiError> {
        self.client.update_feedback_status(id, status).await
    }
}
