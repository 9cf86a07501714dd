use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, MessageResponse},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// The session lives in an HTTP-only cookie, so every browser fetch has
    /// to opt into sending credentials.
    fn with_credentials(request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            request.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            request
        }
    }

    /// Sends the request and turns any non-2xx status into an [`ApiError`]
    /// carrying the backend's `message` field when one is present.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = Self::with_credentials(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<MessageResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        log::debug!("request failed with status {}: {}", status, message);
        Err(ApiError::http(status.as_u16(), message))
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// For mutations whose response body is not interpreted.
    pub(super) async fn send_discarding(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

pub(super) fn path_segment(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}
