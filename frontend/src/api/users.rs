use super::{
    client::ApiClient,
    types::{ApiError, UpdateUser, UserResponse},
};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UserResponse, ApiError> {
        self.get_json(&format!("/users/{}", user_id)).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update: &UpdateUser,
    ) -> Result<UserResponse, ApiError> {
        self.put_json(&format!("/users/{}", user_id), update).await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", user_id)).await
    }
}
