use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::utils::validation;
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let email = email.trim();
        validation::email(email)?;
        self.client.request_password_reset(email.to_string()).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn known_email_gets_reset_link() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/forgot-password");
            then.status(200)
                .json_body(json!({ "message": "Password reset link sent to your email." }));
        });

        let response = repository(&server)
            .request_reset("  meera@example.com ")
            .await
            .unwrap();
        assert_eq!(response.message, "Password reset link sent to your email.");
    }

    #[tokio::test]
    async fn unknown_email_reports_not_found() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/forgot-password");
            then.status(404)
                .json_body(json!({ "error": "User not found", "code": "NOT_FOUND" }));
        });

        let err = repository(&server)
            .request_reset("nobody@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let err = repository(&server).request_reset("meera").await.unwrap_err();
        assert_eq!(err.error, "Please enter a valid email address");
        assert_eq!(server.hits(POST, "/api/auth/forgot-password"), 0);
    }
}
