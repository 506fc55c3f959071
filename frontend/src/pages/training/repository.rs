use crate::{
    api::{ApiError, TrainingApi},
    pages::training::utils::TrainingOverview,
    state::workflow::CheckinProgress,
};

/// Fetches the active trainings and the contractor's completions for one
/// page visit.
pub async fn load_overview<A>(api: &A, contractor_id: &str) -> Result<TrainingOverview, ApiError>
where
    A: TrainingApi + ?Sized,
{
    let trainings = api
        .list_active_trainings()
        .await?
        .into_iter()
        .filter(|t| t.is_active)
        .collect();
    let completed_ids = api
        .list_completed_trainings(contractor_id)
        .await?
        .into_iter()
        .map(|c| c.training_id)
        .collect();
    Ok(TrainingOverview {
        trainings,
        completed_ids,
    })
}

/// Records a completion for the checked-in contractor and keeps the returned
/// score for the summary page.
pub async fn complete_training<A>(
    api: &A,
    progress: &CheckinProgress,
    training_id: &str,
) -> Result<Option<i32>, ApiError>
where
    A: TrainingApi + ?Sized,
{
    let contractor_id = progress
        .require_contractor_id()
        .map_err(|err| ApiError::validation(err.to_string()))?;
    let response = api.complete_training(training_id, &contractor_id).await?;
    if let Some(score) = response.score {
        if let Err(err) = progress.record_score(score) {
            log::warn!("training score not stored: {}", err);
        }
    }
    log::info!("training {} completed by {}", training_id, contractor_id);
    Ok(response.score)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{CompletedTraining, MockTrainingApi, TrainingCompletionResponse};
    use crate::pages::training::utils::fixtures::{training, trainings};
    use crate::state::workflow::{CONTRACTOR_ID_KEY, LAST_SCORE_KEY};
    use crate::utils::storage::{AppStorage, KeyValueStore, MemoryStorage};

    #[tokio::test]
    async fn overview_combines_active_list_and_completions() {
        let mut api = MockTrainingApi::new();
        api.expect_list_active_trainings().returning(|| {
            let mut list = trainings(&["a", "b"]);
            list.push(crate::api::Training {
                is_active: false,
                ..training("old")
            });
            Ok(list)
        });
        api.expect_list_completed_trainings()
            .withf(|id| id == "abc123")
            .returning(|_| {
                Ok(vec![CompletedTraining {
                    training_id: "a".into(),
                    score: Some(90),
                }])
            });

        let overview = load_overview(&api, "abc123").await.unwrap();
        assert_eq!(overview.trainings.len(), 2);
        assert_eq!(overview.completed_ids, vec!["a".to_string()]);
        assert_eq!(overview.percentage(), 50);
    }

    #[tokio::test]
    async fn overview_fails_when_completions_cannot_load() {
        let mut api = MockTrainingApi::new();
        api.expect_list_active_trainings()
            .returning(|| Ok(trainings(&["a"])));
        api.expect_list_completed_trainings()
            .returning(|_| Err(ApiError::request_failed("offline")));
        assert!(load_overview(&api, "abc123").await.is_err());
    }

    #[tokio::test]
    async fn completion_stores_returned_score() {
        let mut api = MockTrainingApi::new();
        api.expect_complete_training()
            .withf(|training_id, contractor_id| training_id == "a" && contractor_id == "abc123")
            .returning(|_, _| Ok(TrainingCompletionResponse { score: Some(85) }));
        let memory = MemoryStorage::with_entries([(CONTRACTOR_ID_KEY, "abc123")]);
        let progress = CheckinProgress::new(AppStorage::new(memory.clone()));

        let score = complete_training(&api, &progress, "a").await.unwrap();
        assert_eq!(score, Some(85));
        assert_eq!(memory.get(LAST_SCORE_KEY).unwrap().as_deref(), Some("85"));
    }

    #[tokio::test]
    async fn completion_without_checkin_is_rejected_locally() {
        let mut api = MockTrainingApi::new();
        api.expect_complete_training().times(0);
        let progress = CheckinProgress::new(AppStorage::new(MemoryStorage::new()));

        let err = complete_training(&api, &progress, "a").await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
