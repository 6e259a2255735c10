use crate::api::{ApiClient, ApiError, RegisterUser, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, payload: RegisterUser) -> Result<UserResponse, ApiError> {
        self.client.register(&payload).await
    }
}
