use super::{
    client::ApiClient,
    types::{ApiError, ApplicationPayload, VolunteerApplication, VolunteerApplicationView},
};
use serde_json::json;

const PREFIX: &str = "/volunteer-applications";

impl ApiClient {
    pub async fn apply_as_volunteer(
        &self,
        description: String,
    ) -> Result<VolunteerApplication, ApiError> {
        self.post_json(PREFIX, &ApplicationPayload { description })
            .await
    }

    pub async fn get_user_applications(
        &self,
        user_id: i64,
    ) -> Result<Vec<VolunteerApplication>, ApiError> {
        self.get_json(&format!("{}/user/{}", PREFIX, user_id)).await
    }

    pub async fn get_applications(&self) -> Result<Vec<VolunteerApplicationView>, ApiError> {
        self.get_json(PREFIX).await
    }

    pub async fn accept_application(
        &self,
        application_id: i64,
    ) -> Result<VolunteerApplication, ApiError> {
        self.put_json(&format!("{}/{}/accept", PREFIX, application_id), &json!({}))
            .await
    }

    pub async fn reject_application(
        &self,
        application_id: i64,
    ) -> Result<VolunteerApplication, ApiError> {
        self.put_json(&format!("{}/{}/reject", PREFIX, application_id), &json!({}))
            .await
    }
}
