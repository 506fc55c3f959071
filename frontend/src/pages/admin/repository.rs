use crate::{
    api::{ApiError, Group, GroupApi, GroupMember, SettingsApi, SystemSettings},
    pages::admin::utils::GroupForm,
};

pub async fn save_settings<A>(api: &A, token: &str, settings: &SystemSettings) -> Result<(), ApiError>
where
    A: SettingsApi + ?Sized,
{
    api.update_settings(token, settings).await?;
    log::info!(
        "settings saved (training required: {}, photo required: {})",
        settings.training_required,
        settings.visitor_photo_required
    );
    Ok(())
}

pub async fn create_group<A>(api: &A, token: &str, form: &GroupForm) -> Result<Group, ApiError>
where
    A: GroupApi + ?Sized,
{
    let request = form.to_request()?;
    let group = api.create_group(token, &request).await?;
    log::info!("group {} created", group.name);
    Ok(group)
}

/// Members of the selected group; no selection means nothing to fetch.
pub async fn load_members<A>(
    api: &A,
    token: &str,
    group_name: Option<&str>,
) -> Result<Vec<GroupMember>, ApiError>
where
    A: GroupApi + ?Sized,
{
    match group_name {
        Some(name) => api.list_group_members(token, name).await,
        None => Ok(Vec::new()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{MockGroupApi, MockSettingsApi};

    #[tokio::test]
    async fn save_settings_sends_bearer_token() {
        let mut api = MockSettingsApi::new();
        api.expect_update_settings()
            .withf(|token, settings| token == "tok" && settings.training_required)
            .times(1)
            .returning(|_, _| Ok(()));
        let settings = SystemSettings {
            visitor_photo_required: false,
            training_required: true,
        };
        save_settings(&api, "tok", &settings).await.unwrap();
    }

    #[tokio::test]
    async fn create_group_validates_before_calling_server() {
        let mut api = MockGroupApi::new();
        api.expect_create_group().times(0);
        let err = create_group(&api, "tok", &GroupForm::default())
            .await
            .unwrap_err();
        assert_eq!(err.error, "Group name is required.");
    }

    #[tokio::test]
    async fn create_group_returns_created_group() {
        let mut api = MockGroupApi::new();
        api.expect_create_group()
            .withf(|token, request| token == "tok" && request.name == "Electricians")
            .returning(|_, request| {
                Ok(Group {
                    id: "g1".into(),
                    name: request.name.clone(),
                    description: request.description.clone(),
                })
            });
        let form = GroupForm {
            name: "Electricians".into(),
            description: "Licensed trades".into(),
        };
        let group = create_group(&api, "tok", &form).await.unwrap();
        assert_eq!(group.id, "g1");
    }

    #[tokio::test]
    async fn members_are_only_fetched_for_a_selection() {
        let mut api = MockGroupApi::new();
        api.expect_list_group_members()
            .withf(|_, name| name == "Facilities & Ops")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        assert!(load_members(&api, "tok", None).await.unwrap().is_empty());
        assert!(load_members(&api, "tok", Some("Facilities & Ops"))
            .await
            .unwrap()
            .is_empty());
    }
}
