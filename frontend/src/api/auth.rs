use async_trait::async_trait;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserIdentity},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn current_user(&self, token: &str) -> Result<UserIdentity, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        self.send_json(self.http_client().post(url).json(request))
            .await
    }

    async fn current_user(&self, token: &str) -> Result<UserIdentity, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/auth/me").await;
        self.send_json(self.http_client().get(url).headers(headers))
            .await
    }
}
