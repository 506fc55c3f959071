use crate::{
    api::{ApiClient, ApiError, Group, GroupApi, GroupMember, SettingsApi, SystemSettings},
    config::FLASH_TIMEOUT_MS,
    pages::admin::{repository, utils::GroupForm},
    state::session::use_session,
    utils::lifecycle::{Flash, MountGuard},
};
use leptos::*;

fn bump(counter: RwSignal<u32>) {
    counter.update(|value| *value = value.wrapping_add(1));
}

/// Bearer token of the signed-in admin; empty when signed out.
fn use_token() -> Memo<String> {
    let (session, _) = use_session();
    create_memo(move |_| session.get().token().map(str::to_string).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub draft: RwSignal<SystemSettings>,
    pub reload: RwSignal<u32>,
    pub resource: Resource<u32, Result<SystemSettings, ApiError>>,
    pub save_action: Action<SystemSettings, Result<(), ApiError>>,
    pub success: Flash,
    pub error: Flash,
}

impl SettingsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let token = use_token();
        let guard = MountGuard::new();

        let draft = create_rw_signal(SystemSettings::default());
        let reload = create_rw_signal(0u32);
        let success = Flash::new();
        let error = Flash::new();

        let api_for_resource = api.clone();
        let resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_for_resource.clone();
                async move { api.fetch_settings().await }
            },
        );

        create_effect(move |_| {
            if let Some(Ok(settings)) = resource.get() {
                draft.set(settings);
            }
        });

        let save_action = create_action(move |settings: &SystemSettings| {
            let api = api.clone();
            let settings = *settings;
            let token = token.get_untracked();
            async move { repository::save_settings(&api, &token, &settings).await }
        });

        create_effect(move |_| {
            let Some(result) = save_action.value().get() else {
                return;
            };
            match result {
                Ok(()) => {
                    error.clear();
                    success.show_for("Settings saved.", guard.clone(), FLASH_TIMEOUT_MS);
                }
                Err(err) => {
                    success.clear();
                    error.show_for(err.error, guard.clone(), FLASH_TIMEOUT_MS);
                }
            }
        });

        Self {
            draft,
            reload,
            resource,
            save_action,
            success,
            error,
        }
    }

    /// Saving is only offered once the stored settings have loaded, so the
    /// defaults in `draft` never overwrite them.
    pub fn can_save(&self) -> bool {
        matches!(self.resource.get(), Some(Ok(_))) && !self.save_action.pending().get()
    }

    pub fn save(&self) {
        if !untrack(|| self.can_save()) {
            log::debug!("settings not loaded yet; save ignored");
            return;
        }
        self.save_action.dispatch(self.draft.get_untracked());
    }

    pub fn refresh(&self) {
        bump(self.reload);
    }
}

impl Default for SettingsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct GroupsViewModel {
    pub form: RwSignal<GroupForm>,
    pub reload: RwSignal<u32>,
    pub selected: RwSignal<Option<String>>,
    pub groups: Resource<(String, u32), Result<Vec<Group>, ApiError>>,
    pub members: Resource<(String, Option<String>), Result<Vec<GroupMember>, ApiError>>,
    pub create_action: Action<GroupForm, Result<Group, ApiError>>,
    pub success: Flash,
    pub error: Flash,
}

impl GroupsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let token = use_token();
        let guard = MountGuard::new();

        let form = create_rw_signal(GroupForm::default());
        let reload = create_rw_signal(0u32);
        let selected = create_rw_signal(None::<String>);
        let success = Flash::new();
        let error = Flash::new();

        let api_for_groups = api.clone();
        let groups = create_resource(
            move || (token.get(), reload.get()),
            move |(token, _reload)| {
                let api = api_for_groups.clone();
                async move { api.list_groups(&token).await }
            },
        );

        let api_for_members = api.clone();
        let members = create_resource(
            move || (token.get(), selected.get()),
            move |(token, selected)| {
                let api = api_for_members.clone();
                async move { repository::load_members(&api, &token, selected.as_deref()).await }
            },
        );

        let create_action = create_action(move |input: &GroupForm| {
            let api = api.clone();
            let input = input.clone();
            let token = token.get_untracked();
            async move { repository::create_group(&api, &token, &input).await }
        });

        create_effect(move |_| {
            let Some(result) = create_action.value().get() else {
                return;
            };
            match result {
                Ok(group) => {
                    form.set(GroupForm::default());
                    error.clear();
                    success.show_for(
                        format!("Group \"{}\" created.", group.name),
                        guard.clone(),
                        FLASH_TIMEOUT_MS,
                    );
                    bump(reload);
                }
                Err(err) => {
                    success.clear();
                    error.show_for(err.error, guard.clone(), FLASH_TIMEOUT_MS);
                }
            }
        });

        Self {
            form,
            reload,
            selected,
            groups,
            members,
            create_action,
            success,
            error,
        }
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        self.error.clear();
        self.create_action.dispatch(self.form.get_untracked());
    }

    pub fn select(&self, group_name: String) {
        self.selected.set(Some(group_name));
    }

    pub fn refresh(&self) {
        bump(self.reload);
    }
}

impl Default for GroupsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
