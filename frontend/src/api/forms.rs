use async_trait::async_trait;

use super::{
    client::ApiClient,
    types::{ApiError, ContractorIntakeResponse, ContractorSubmission},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ContractorIntake {
    async fn submit_contractor(
        &self,
        submission: &ContractorSubmission,
    ) -> Result<ContractorIntakeResponse, ApiError>;
}

#[async_trait(?Send)]
impl ContractorIntake for ApiClient {
    async fn submit_contractor(
        &self,
        submission: &ContractorSubmission,
    ) -> Result<ContractorIntakeResponse, ApiError> {
        let url = self.endpoint("/forms/contractor").await;
        self.send_json(self.http_client().post(url).json(submission))
            .await
    }
}
