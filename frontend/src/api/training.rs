use async_trait::async_trait;

use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, CompleteTrainingRequest, CompletedTraining, Training,
        TrainingCompletionResponse,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TrainingApi {
    async fn list_active_trainings(&self) -> Result<Vec<Training>, ApiError>;
    async fn list_completed_trainings(
        &self,
        contractor_id: &str,
    ) -> Result<Vec<CompletedTraining>, ApiError>;
    async fn complete_training(
        &self,
        training_id: &str,
        contractor_id: &str,
    ) -> Result<TrainingCompletionResponse, ApiError>;
}

#[async_trait(?Send)]
impl TrainingApi for ApiClient {
    async fn list_active_trainings(&self) -> Result<Vec<Training>, ApiError> {
        let url = self.endpoint("/trainings/active").await;
        self.send_json(self.http_client().get(url)).await
    }

    async fn list_completed_trainings(
        &self,
        contractor_id: &str,
    ) -> Result<Vec<CompletedTraining>, ApiError> {
        let path = format!(
            "/trainings/completed/{}",
            encode_segment(contractor_id)
        );
        let url = self.endpoint(&path).await;
        self.send_json(self.http_client().get(url)).await
    }

    async fn complete_training(
        &self,
        training_id: &str,
        contractor_id: &str,
    ) -> Result<TrainingCompletionResponse, ApiError> {
        let path = format!(
            "/trainings/{}/complete",
            encode_segment(training_id)
        );
        let url = self.endpoint(&path).await;
        let body = CompleteTrainingRequest {
            contractor_id: contractor_id.to_string(),
        };
        self.send_json(self.http_client().post(url).json(&body))
            .await
    }
}
