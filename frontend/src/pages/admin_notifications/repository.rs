use crate::api::{ApiClient, ApiError, Notification, NotificationPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminNotificationsRepository {
    client: Rc<ApiClient>,
}

impl AdminNotificationsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Notification>, ApiError> {
        self.client.get_notifications().await
    }

    /// Creates when `id` is `None`, otherwise updates in place.
    pub async fn save(
        &self,
        id: Option<i64>,
        payload: NotificationPayload,
    ) -> Result<Notification, ApiError> {
        match id {
            Some(id) => self.client.update_notification(id, &payload).await,
            None => self.client.create_notification(&payload).await,
        }
    }

    pub async fn deactivate(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_notification(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn body(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Dam gates opening",
            "message": "Move to higher ground",
            "notification_type": "Emergency",
            "target_role": "All",
            "scheduled_for": "2025-08-01T10:00:00Z",
            "created_at": "2025-08-01T09:00:00Z",
            "active": true
        })
    }

    fn payload() -> NotificationPayload {
        NotificationPayload {
            title: "Dam gates opening".into(),
            message: "Move to higher ground".into(),
            notification_type: "Emergency".into(),
            target_role: "All".into(),
            scheduled_for: None,
        }
    }

    #[tokio::test]
    async fn save_without_id_creates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/notifications");
            then.status(201).json_body(body(12));
        });

        let repo = AdminNotificationsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let saved = repo.save(None, payload()).await.unwrap();
        assert_eq!(saved.id, 12);
        assert_eq!(server.hits(PUT, "/api/notifications/12"), 0);
    }

    #[tokio::test]
    async fn save_with_id_updates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/notifications/12");
            then.status(200).json_body(body(12));
        });

        let repo = AdminNotificationsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        repo.save(Some(12), payload()).await.unwrap();
        assert_eq!(server.hits(PUT, "/api/notifications/12"), 1);
    }
}
