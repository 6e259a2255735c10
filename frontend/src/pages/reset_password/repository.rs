use super::utils::ResetPasswordForm;
use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Validates the form locally; only a well-formed form reaches the API.
    pub async fn reset(&self, form: &ResetPasswordForm) -> Result<MessageResponse, ApiError> {
        let (token, new_password) = form.validate()?;
        self.client.reset_password(token, new_password).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn form(token: &str) -> ResetPasswordForm {
        ResetPasswordForm {
            token: token.into(),
            password: "NewPass123".into(),
            confirm_password: "NewPass123".into(),
        }
    }

    fn repository(server: &MockServer) -> ResetPasswordRepository {
        ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn valid_form_resets_password() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/reset-password");
            then.status(200)
                .json_body(json!({ "message": "Password has been reset successfully." }));
        });

        let response = repository(&server).reset(&form(" abc123 ")).await.unwrap();
        assert_eq!(response.message, "Password has been reset successfully.");
    }

    #[tokio::test]
    async fn expired_token_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/reset-password");
            then.status(400)
                .json_body(json!({ "error": "Token expired", "code": "BAD_REQUEST" }));
        });

        let err = repository(&server).reset(&form("old")).await.unwrap_err();
        assert_eq!(err.error, "Token expired");
    }

    #[tokio::test]
    async fn blank_token_never_hits_the_api() {
        let server = MockServer::start_async().await;
        let err = repository(&server).reset(&form("   ")).await.unwrap_err();
        assert_eq!(err.error, "Invalid token");
        assert_eq!(server.hits(POST, "/api/auth/reset-password"), 0);
    }
}
