use super::{
    client::ApiClient,
    types::{ApiError, AuthCheckResponse, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// A 2xx body with `success: false` counts as a failed login.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response: LoginResponse = self
            .send_json(self.http_client().post(&url).json(request))
            .await?;
        if response.success {
            Ok(response)
        } else {
            Err(ApiError::http(
                200,
                response.message.clone().unwrap_or_default(),
            ))
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        self.send_discarding(self.http_client().post(&url)).await
    }

    pub async fn check_auth(&self) -> Result<AuthCheckResponse, ApiError> {
        let url = self.endpoint("/auth/check").await;
        self.send_json(self.http_client().get(&url)).await
    }
}
