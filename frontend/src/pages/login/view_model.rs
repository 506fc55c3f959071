use super::utils::{landing_path, validate_credentials};
use crate::{
    api::{ApiError, LoginRequest, UserIdentity},
    state::session::use_login_action,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<UserIdentity, ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    pub fn handle_submit(&self) -> impl Fn(SubmitEvent) + Copy + 'static {
        let vm = *self;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    }

    /// Validates the form locally and dispatches the login when it passes.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match validate_credentials(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    password.set(String::new());
                    navigation::redirect(landing_path(&user));
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}
