use crate::{
    api::{ApiClient, ApiError, AuthApi, LoginRequest, UserIdentity},
    utils::storage::{use_storage, KeyValueStore, StorageError},
};
use leptos::*;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    user: UserIdentity,
    token: String,
}

/// Who is signed in on this client. The user and the bearer token are one
/// optional pair, so a user without a token cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

impl Session {
    pub fn loading() -> Self {
        Self {
            credentials: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            credentials: None,
            loading: false,
        }
    }

    pub fn authenticated(user: UserIdentity, token: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials {
                user,
                token: token.into(),
            }),
            loading: false,
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn role(&self) -> Option<&str> {
        self.user().map(|u| u.role.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Reads the credentials persisted by a previous login. Anything partial or
/// malformed counts as signed out.
pub fn restore_session(store: &dyn KeyValueStore) -> Session {
    let token = store.get(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty());
    let user = store
        .get(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| match serde_json::from_str::<UserIdentity>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("ignoring malformed persisted user: {}", err);
                None
            }
        });
    match (user, token) {
        (Some(user), Some(token)) => Session::authenticated(user, token),
        _ => Session::anonymous(),
    }
}

pub fn persist_session(
    store: &dyn KeyValueStore,
    user: &UserIdentity,
    token: &str,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user).map_err(|_| StorageError::Access {
        key: USER_KEY.to_string(),
    })?;
    store.set(TOKEN_KEY, token)?;
    store.set(USER_KEY, &raw)
}

pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)
}

/// Confirms restored credentials with the server. A rejected token signs the
/// client out; any other failure keeps the restored identity.
pub async fn verify_session<A>(api: &A, store: &dyn KeyValueStore, restored: Session) -> Session
where
    A: AuthApi + ?Sized,
{
    let Some(token) = restored.token().map(str::to_string) else {
        return Session::anonymous();
    };
    match api.current_user(&token).await {
        Ok(user) => {
            if let Err(err) = persist_session(store, &user, &token) {
                log::warn!("failed to refresh persisted user: {}", err);
            }
            Session::authenticated(user, token)
        }
        Err(err) if err.is_unauthorized() => {
            log::info!("persisted session rejected; signing out");
            if let Err(err) = clear_session(store) {
                log::warn!("failed to clear persisted session: {}", err);
            }
            Session::anonymous()
        }
        Err(err) => {
            log::warn!("could not verify session, keeping stored identity: {}", err);
            restored.with_loading(false)
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = create_signal(Session::loading());
    provide_context::<SessionContext>((session, set_session));

    let storage = use_storage();
    let api = use_context::<ApiClient>().unwrap_or_default();
    create_effect(move |_| {
        let storage = storage.clone();
        let api = api.clone();
        let restored = restore_session(&*storage);
        spawn_local(async move {
            let verified = verify_session(&api, &*storage, restored).await;
            log::debug!("session restored (authenticated: {})", verified.is_authenticated());
            set_session.set(verified);
        });
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(Session::anonymous()))
}

pub async fn login_request<A>(
    api: &A,
    store: &dyn KeyValueStore,
    request: &LoginRequest,
    set_session: WriteSignal<Session>,
) -> Result<UserIdentity, ApiError>
where
    A: AuthApi + ?Sized,
{
    let response = api.login(request).await?;
    if let Err(err) = persist_session(store, &response.user, &response.token) {
        log::warn!("signed in but could not persist session: {}", err);
    }
    log::info!("signed in as {} ({})", response.user.id, response.user.role);
    let user = response.user.clone();
    set_session.set(Session::authenticated(response.user, response.token));
    Ok(user)
}

pub fn logout(store: &dyn KeyValueStore, set_session: WriteSignal<Session>) {
    if let Err(err) = clear_session(store) {
        log::warn!("failed to clear persisted session: {}", err);
    }
    set_session.set(Session::anonymous());
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserIdentity, ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let storage = use_storage();

    create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let api = api.clone();
        let storage = storage.clone();
        async move { login_request(&api, &*storage, &request, set_session).await }
    })
}

/// Signs out locally and sends the browser to the login page.
pub fn use_logout() -> impl Fn() + Clone + 'static {
    let (_session, set_session) = use_session();
    let storage = use_storage();
    move || {
        logout(&*storage, set_session);
        crate::utils::navigation::redirect(crate::router::LOGIN_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn new_session_starts_loading_without_credentials() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn authenticated_session_carries_user_and_token_together() {
        let session = Session::authenticated(admin_user(), "tok");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.role(), Some("admin"));
        assert!(!session.is_loading());
    }

    #[test]
    fn restore_requires_both_token_and_user() {
        let user_json = serde_json::to_string(&regular_user()).unwrap();
        let only_user = MemoryStorage::with_entries([(USER_KEY, user_json.as_str())]);
        assert_eq!(restore_session(&only_user), Session::anonymous());

        let only_token = MemoryStorage::with_entries([(TOKEN_KEY, "tok")]);
        assert_eq!(restore_session(&only_token), Session::anonymous());

        let both = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, user_json.as_str())]);
        assert_eq!(
            restore_session(&both),
            Session::authenticated(regular_user(), "tok")
        );
    }

    #[test]
    fn restore_ignores_malformed_user_json() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{not json")]);
        assert!(!restore_session(&storage).is_authenticated());
    }

    #[test]
    fn persist_then_clear_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        persist_session(&storage, &admin_user(), "tok-9").unwrap();
        assert!(restore_session(&storage).is_authenticated());
        clear_session(&storage).unwrap();
        assert!(storage.is_empty());
    }
}
