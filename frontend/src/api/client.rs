use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{api::types::ApiError, config, state::session, utils::storage as storage_utils};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn auth_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = session::access_token() {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            session::clear();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        if storage_utils::current_path().as_deref() == Some("/login") {
            return;
        }
        storage_utils::redirect("/login");
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .headers(Self::auth_headers())
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status.as_u16())),
        }
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn expect_empty(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.client.get(url)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self.send(self.client.post(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self.send(self.client.put(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.client.delete(url)).await?;
        Self::expect_empty(response).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use crate::api::types::ApiError;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        status: u16,
        body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }

        pub(crate) fn into_response(self) -> reqwest::Response {
            let body = if self.status == 204 {
                Vec::new()
            } else {
                serde_json::to_vec(&self.body).unwrap_or_default()
            };
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(body)
                .expect("valid mock response");
            reqwest::Response::from(response)
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut entries = registry().lock().expect("mock registry lock");
        entries.retain(|(base, _)| base != &base_url);
        entries.push((base_url, responder));
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let entries = registry().lock().ok()?;
        entries
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }
}
