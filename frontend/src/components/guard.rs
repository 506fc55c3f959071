use crate::{
    components::layout::LoadingSpinner,
    router::{LOGIN_PATH, UNAUTHORIZED_PATH},
    state::{
        session::{use_session, Session},
        workflow::{use_checkin_progress, WorkflowError},
    },
    utils::navigation,
};
use leptos::*;
use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// Access rules attached to a protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
    pub require_auth: bool,
    pub allowed_roles: BTreeSet<String>,
    pub redirect_to: String,
}

impl Default for RouteRequirement {
    fn default() -> Self {
        Self::authenticated()
    }
}

impl RouteRequirement {
    pub fn authenticated() -> Self {
        Self {
            require_auth: true,
            allowed_roles: BTreeSet::new(),
            redirect_to: LOGIN_PATH.to_string(),
        }
    }

    pub fn public() -> Self {
        Self {
            require_auth: false,
            ..Self::authenticated()
        }
    }

    pub fn admin() -> Self {
        Self::authenticated().with_roles(["admin"])
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn redirecting_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Loading,
    Redirect(String),
    Allow,
}

/// Decides whether `session` may see a route guarded by `requirement`.
///
/// Loading always wins. Missing credentials redirect to the requirement's
/// target, a role outside a non-empty allow-list redirects to
/// `/unauthorized`, and everything else is allowed. When `require_auth` is
/// false an anonymous session skips the role check entirely.
pub fn evaluate(session: &Session, requirement: &RouteRequirement) -> Verdict {
    if session.is_loading() {
        return Verdict::Loading;
    }
    if requirement.require_auth && (session.user().is_none() || session.token().is_none()) {
        return Verdict::Redirect(requirement.redirect_to.clone());
    }
    if let Some(user) = session.user() {
        if !requirement.allowed_roles.is_empty() && !requirement.allowed_roles.contains(&user.role)
        {
            return Verdict::Redirect(UNAUTHORIZED_PATH.to_string());
        }
    }
    Verdict::Allow
}

/// Remembers the last redirect it fired so re-renders with the same verdict
/// never navigate twice. Granting access re-arms it.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    fired: Option<String>,
}

impl RedirectLatch {
    pub fn observe(&mut self, verdict: &Verdict) -> Option<String> {
        match verdict {
            Verdict::Redirect(target) => {
                if self.fired.as_deref() == Some(target.as_str()) {
                    None
                } else {
                    self.fired = Some(target.clone());
                    Some(target.clone())
                }
            }
            Verdict::Allow => {
                self.fired = None;
                None
            }
            Verdict::Loading => None,
        }
    }
}

#[component]
pub fn ProtectedRoute(
    #[prop(optional)] requirement: Option<RouteRequirement>,
    children: ChildrenFn,
) -> impl IntoView {
    let (session, _) = use_session();
    let requirement = requirement.unwrap_or_default();
    let verdict = create_memo(move |_| evaluate(&session.get(), &requirement));

    let latch = Rc::new(RefCell::new(RedirectLatch::default()));
    create_effect(move |_| {
        let current = verdict.get();
        if let Some(target) = latch.borrow_mut().observe(&current) {
            navigation::redirect(&target);
        }
    });

    move || match verdict.get() {
        Verdict::Loading => view! { <LoadingSpinner /> }.into_view(),
        Verdict::Redirect(_) => ().into_view(),
        Verdict::Allow => children().into_view(),
    }
}

/// Shorthand for a route that only needs a signed-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <ProtectedRoute requirement=RouteRequirement::authenticated()>{children()}</ProtectedRoute> }
}

/// Gate for workflow pages after check-in. Without a persisted contractor id
/// the visitor is told why and sent back to the check-in form.
#[component]
pub fn RequireCheckin(children: ChildrenFn) -> impl IntoView {
    let progress = use_checkin_progress();
    let missing = progress.require_contractor_id().err();
    let has_checkin = missing.is_none();

    create_effect(move |_| {
        if let Some(err) = missing.as_ref() {
            redirect_missing_checkin(err);
        }
    });

    view! {
        <Show when=move || has_checkin fallback=|| ()>
            {children()}
        </Show>
    }
}

fn redirect_missing_checkin(err: &WorkflowError) {
    log::warn!("workflow page opened without a check-in: {}", err);
    navigation::alert(&err.to_string());
    navigation::redirect(err.recovery_path());
}
