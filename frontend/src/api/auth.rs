use super::{
    client::ApiClient,
    types::{
        ApiError, LoginRequest, LoginResponse, MessageResponse, RegisterUser,
        RequestPasswordResetRequest, ResetPasswordRequest, UserResponse,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/login", request).await
    }

    pub async fn register(&self, request: &RegisterUser) -> Result<UserResponse, ApiError> {
        self.post_json("/users", request).await
    }

    pub async fn request_password_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        self.post_json(
            "/auth/forgot-password",
            &RequestPasswordResetRequest { email },
        )
        .await
    }

    pub async fn reset_password(
        &self,
        token: String,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(
            "/auth/reset-password",
            &ResetPasswordRequest {
                token,
                new_password,
            },
        )
        .await
    }
}
