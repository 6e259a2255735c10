use super::{
    client::ApiClient,
    types::{ApiError, CreateFeedback, Feedback, FeedbackStatusPayload},
};

impl ApiClient {
    pub async fn submit_feedback(&self, payload: &CreateFeedback) -> Result<Feedback, ApiError> {
        self.post_json("/feedback", payload).await
    }

    pub async fn get_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.get_json("/feedback").await
    }

    pub async fn update_feedback_status(&self, id: i64, status: &str) -> Result<Feedback, ApiError> {
        self.put_json(
            &format!("/feedback/{}/status", id),
            &FeedbackStatusPayload {
                status: status.to_string(),
            },
        )
        .await
    }
}
