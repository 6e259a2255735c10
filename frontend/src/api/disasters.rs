use super::{
    client::ApiClient,
    types::{ApiError, Disaster, DisasterPayload},
};

impl ApiClient {
    pub async fn list_disasters(&self, status: Option<&str>) -> Result<Vec<Disaster>, ApiError> {
        let url = self.url("/disasters").await;
        let mut builder = self.http_client().get(url);
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            builder = builder.query(&[("status", status)]);
        }
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub async fn create_disaster(&self, payload: &DisasterPayload) -> Result<Disaster, ApiError> {
        self.post_json("/disasters", payload).await
    }

    pub async fn update_disaster(
        &self,
        disaster_id: i64,
        payload: &DisasterPayload,
    ) -> Result<Disaster, ApiError> {
        self.put_json(&format!("/disasters/{}", disaster_id), payload)
            .await
    }

    pub async fn delete_disaster(&self, disaster_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/disasters/{}", disaster_id)).await
    }
}
