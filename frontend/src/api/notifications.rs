use super::{
    client::ApiClient,
    types::{ApiError, Notification, NotificationPayload, UserRole},
};

impl ApiClient {
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications").await
    }

    pub async fn get_role_notifications(&self, role: UserRole) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!("/notifications/user/{}", role.as_str()))
            .await
    }

    pub async fn create_notification(
        &self,
        payload: &NotificationPayload,
    ) -> Result<Notification, ApiError> {
        self.post_json("/notifications", payload).await
    }

    pub async fn update_notification(
        &self,
        id: i64,
        payload: &NotificationPayload,
    ) -> Result<Notification, ApiError> {
        self.put_json(&format!("/notifications/{}", id), payload)
            .await
    }

    pub async fn delete_notification(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/notifications/{}", id)).await
    }
}
