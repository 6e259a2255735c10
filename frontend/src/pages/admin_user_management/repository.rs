use crate::api::{ApiClient, ApiError, UpdateUser, UserResponse};
use std::rc::Rc;

/// Account administration shared by the user and volunteer screens.
#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.client.get_users().await
    }

    pub async fn update(&self, user_id: i64, update: UpdateUser) -> Result<UserResponse, ApiError> {
        self.client.update_user(user_id, &update).await
    }

    pub async fn delete(&self, user_id: i64) -> Result<(), ApiError> {
        self.client.delete_user(user_id).await
    }
}
