use crate::api::{ApiClient, ApiError, UpdateUser, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, user_id: i64) -> Result<UserResponse, ApiError> {
        self.client.get_user(user_id).await
    }

    pub async fn update(&self, user_id: i64, update: UpdateUser) -> Result<UserResponse, ApiError> {
        self.client.update_user(user_id, &update).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn update_puts_partial_changes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/users/1");
            then.status(200).json_body(serde_json::json!({
                "user_id": 1,
                "name": "Asha K",
                "email": "asha@example.com",
                "phone_number": "9000000000",
                "location": "Palakkad",
                "role": "User",
                "user_status": "active",
                "created_at": "2026-01-01T00:00:00Z"
            }));
        });

        let repo = ProfileRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let updated = repo
            .update(
                1,
                UpdateUser {
                    name: Some("Asha K".into()),
                    ..UpdateUser::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha K");
        assert_eq!(server.hits(PUT, "/api/users/1"), 1);
    }
}
