use crate::{
    api::{ApiClient, ApiError},
    config::FLASH_TIMEOUT_MS,
    pages::training::{repository, utils::TrainingOverview},
    router::TRAINING_PATH,
    state::workflow::use_checkin_progress,
    utils::{
        lifecycle::{Flash, MountGuard},
        navigation,
    },
};
use leptos::*;

pub type OverviewResource = Resource<(String, u32), Result<TrainingOverview, ApiError>>;

/// Loads the training overview for the checked-in contractor. Bumping
/// `reload` refetches it.
fn overview_resource(api: ApiClient, contractor_id: String, reload: RwSignal<u32>) -> OverviewResource {
    create_resource(
        move || (contractor_id.clone(), reload.get()),
        move |(contractor_id, _reload)| {
            let api = api.clone();
            async move { repository::load_overview(&api, &contractor_id).await }
        },
    )
}

#[derive(Clone, Copy)]
pub struct TrainingListViewModel {
    pub reload: RwSignal<u32>,
    pub overview: OverviewResource,
}

impl TrainingListViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let contractor_id = use_checkin_progress().contractor_id().unwrap_or_default();
        let reload = create_rw_signal(0u32);
        let overview = overview_resource(api, contractor_id, reload);
        Self { reload, overview }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for TrainingListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct TrainingDetailViewModel {
    pub overview: OverviewResource,
    pub error: Flash,
    pub complete_action: Action<String, Result<Option<i32>, ApiError>>,
}

impl TrainingDetailViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let progress = use_checkin_progress();
        let guard = MountGuard::new();
        let contractor_id = progress.contractor_id().unwrap_or_default();
        let overview = overview_resource(api.clone(), contractor_id, create_rw_signal(0));
        let error = Flash::new();

        let complete_action = create_action(move |training_id: &String| {
            let api = api.clone();
            let progress = progress.clone();
            let training_id = training_id.clone();
            async move { repository::complete_training(&api, &progress, &training_id).await }
        });

        create_effect(move |_| {
            let Some(result) = complete_action.value().get() else {
                return;
            };
            match result {
                Ok(score) => {
                    log::debug!("training completed with score {:?}", score);
                    if guard.is_mounted() {
                        navigation::redirect(TRAINING_PATH);
                    }
                }
                Err(err) => {
                    error.show_for(err.error, guard.clone(), FLASH_TIMEOUT_MS);
                }
            }
        });

        Self {
            overview,
            error,
            complete_action,
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        self.complete_action.pending().into()
    }

    pub fn complete(&self, training_id: String) {
        if self.complete_action.pending().get_untracked() {
            return;
        }
        self.error.clear();
        self.complete_action.dispatch(training_id);
    }
}

impl Default for TrainingDetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::workflow::CONTRACTOR_ID_KEY;
    use crate::test_support::{helpers::provide_memory_storage, ssr::with_local_runtime};

    #[test]
    fn list_view_model_refresh_bumps_reload_counter() {
        with_local_runtime(|| {
            provide_memory_storage(&[(CONTRACTOR_ID_KEY, "abc123")]);
            let vm = TrainingListViewModel::new();
            assert_eq!(vm.reload.get_untracked(), 0);
            vm.refresh();
            assert_eq!(vm.reload.get_untracked(), 1);
        });
    }

    #[test]
    fn detail_view_model_starts_idle() {
        with_local_runtime(|| {
            provide_memory_storage(&[(CONTRACTOR_ID_KEY, "abc123")]);
            let vm = TrainingDetailViewModel::new();
            assert!(!vm.pending().get_untracked());
            assert!(vm.error.get_untracked().is_none());
        });
    }
}
