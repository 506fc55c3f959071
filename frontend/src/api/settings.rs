use async_trait::async_trait;

use super::{
    client::{expect_success, ApiClient},
    types::{ApiError, SystemSettings},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait SettingsApi {
    async fn fetch_settings(&self) -> Result<SystemSettings, ApiError>;
    async fn update_settings(&self, token: &str, settings: &SystemSettings)
        -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl SettingsApi for ApiClient {
    async fn fetch_settings(&self) -> Result<SystemSettings, ApiError> {
        let url = self.endpoint("/settings").await;
        self.send_json(self.http_client().get(url)).await
    }

    async fn update_settings(
        &self,
        token: &str,
        settings: &SystemSettings,
    ) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/admin/settings").await;
        let response = self
            .send(self.http_client().put(url).headers(headers).json(settings))
            .await?;
        expect_success(response).await
    }
}
