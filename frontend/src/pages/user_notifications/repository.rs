use crate::api::{ApiClient, ApiError, Notification, UserRole};
use std::rc::Rc;

#[derive(Clone)]
pub struct UserNotificationsRepository {
    client: Rc<ApiClient>,
}

impl UserNotificationsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn feed(&self, role: UserRole) -> Result<Vec<Notification>, ApiError> {
        self.client.get_role_notifications(role).await
    }
}
