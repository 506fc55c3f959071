use crate::{
    api::{ApiClient, ApiError},
    config::{CHECKIN_REDIRECT_DELAY_MS, FLASH_TIMEOUT_MS},
    pages::checkin::{
        repository::{self, CheckinReceipt, TRAINING_ANNOUNCEMENT},
        utils::ContractorForm,
    },
    state::workflow::{decide_next_step, use_checkin_progress},
    utils::{
        lifecycle::{Flash, MountGuard},
        navigation,
    },
};
use leptos::{ev::SubmitEvent, *};

/// The message shown for a finished submission and whether the workflow
/// moves on.
#[derive(Clone, Copy)]
pub struct SubmitOutcome {
    pub flash: Flash,
    pub generation: u64,
    pub checked_in: bool,
}

#[derive(Clone, Copy)]
pub struct CheckinViewModel {
    pub form: RwSignal<ContractorForm>,
    pub success: Flash,
    pub error: Flash,
    pub submit_action: Action<ContractorForm, Result<CheckinReceipt, ApiError>>,
}

impl CheckinViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let progress = use_checkin_progress();
        let guard = MountGuard::new();

        let form = create_rw_signal(ContractorForm::default());
        let success = Flash::new();
        let error = Flash::new();

        let api_clone = api.clone();
        let submit_action = create_action(move |input: &ContractorForm| {
            let api = api_clone.clone();
            let progress = progress.clone();
            let input = input.clone();
            async move { repository::submit_checkin(&api, &progress, &input).await }
        });

        let vm = Self {
            form,
            success,
            error,
            submit_action,
        };

        create_effect(move |_| {
            let Some(result) = submit_action.value().get() else {
                return;
            };
            let outcome = vm.apply_result(result);
            outcome
                .flash
                .schedule_clear(outcome.generation, guard.clone(), FLASH_TIMEOUT_MS);
            if outcome.checked_in {
                navigation::alert(TRAINING_ANNOUNCEMENT);
                continue_after_checkin(api.clone(), guard.clone());
            }
        });

        vm
    }

    /// Moves a finished submission into page state. A successful check-in
    /// resets the form and shows the confirmation; a failure keeps the form
    /// filled in and shows the error.
    pub fn apply_result(&self, result: Result<CheckinReceipt, ApiError>) -> SubmitOutcome {
        match result {
            Ok(receipt) => {
                self.form.set(ContractorForm::default());
                self.error.clear();
                SubmitOutcome {
                    flash: self.success,
                    generation: self.success.show(receipt.message),
                    checked_in: true,
                }
            }
            Err(err) => {
                self.success.clear();
                SubmitOutcome {
                    flash: self.error,
                    generation: self.error.show(err.error),
                    checked_in: false,
                }
            }
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }

    pub fn handle_submit(&self) -> impl Fn(SubmitEvent) + Copy + 'static {
        let form = self.form;
        let submit_action = self.submit_action;
        let error = self.error;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if submit_action.pending().get_untracked() {
                return;
            }
            error.clear();
            submit_action.dispatch(form.get_untracked());
        }
    }
}

impl Default for CheckinViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for the confirmation to be read, then routes to training or home
/// depending on the system settings.
fn continue_after_checkin(api: ApiClient, guard: MountGuard) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(CHECKIN_REDIRECT_DELAY_MS).await;
        let next = decide_next_step(&api).await;
        if guard.is_mounted() {
            log::info!("check-in complete, continuing to {:?}", next);
            navigation::redirect(next.path());
        }
    });
}

pub fn use_checkin_view_model() -> CheckinViewModel {
    CheckinViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn filled_form() -> ContractorForm {
        ContractorForm {
            first_name: "Sam".into(),
            last_name: "Okafor".into(),
            company: "Brightline Electric".into(),
            host_name: "Dana Park".into(),
            visit_date: "2026-03-05".into(),
            ..ContractorForm::default()
        }
    }

    #[test]
    fn view_model_starts_with_empty_form_and_no_messages() {
        with_runtime(|| {
            let vm = use_checkin_view_model();
            assert_eq!(vm.form.get_untracked(), ContractorForm::default());
            assert!(vm.success.get_untracked().is_none());
            assert!(vm.error.get_untracked().is_none());
            assert!(!vm.pending().get_untracked());
        });
    }

    #[test]
    fn successful_checkin_resets_form_and_shows_confirmation() {
        with_runtime(|| {
            let vm = use_checkin_view_model();
            vm.form.set(filled_form());
            vm.error.show("stale error");

            let outcome = vm.apply_result(Ok(CheckinReceipt {
                contractor_id: "abc123".into(),
                message: "Thanks, Sam!".into(),
            }));

            assert!(outcome.checked_in);
            assert_eq!(vm.form.get_untracked(), ContractorForm::default());
            assert_eq!(vm.success.get_untracked().as_deref(), Some("Thanks, Sam!"));
            assert!(vm.error.get_untracked().is_none());
            assert!(outcome.flash.clear_if_current(outcome.generation));
            assert!(vm.success.get_untracked().is_none());
        });
    }

    #[test]
    fn failed_checkin_keeps_form_and_shows_error() {
        with_runtime(|| {
            let vm = use_checkin_view_model();
            vm.form.set(filled_form());

            let outcome = vm.apply_result(Err(ApiError::http(400, "Host not found")));

            assert!(!outcome.checked_in);
            assert_eq!(vm.form.get_untracked(), filled_form());
            assert_eq!(vm.error.get_untracked().as_deref(), Some("Host not found"));
            assert!(vm.success.get_untracked().is_none());
        });
    }
}
