use crate::{
    components::{
        guard::{evaluate, RouteRequirement, Verdict},
        layout::LoadingSpinner,
    },
    router::{ADMIN_PATH, CHECKIN_PATH, HELP_PATH, HOME_PATH, LOGIN_PATH},
    state::session::{use_logout, use_session, Session},
};
use leptos::*;

/// What the admin shell shows for a session. Both denials stay on the page;
/// the admin area never navigates away on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Loading,
    NotLoggedIn,
    WrongRole,
    Granted,
}

pub fn admin_access(session: &Session) -> AdminAccess {
    match evaluate(session, &RouteRequirement::admin()) {
        Verdict::Loading => AdminAccess::Loading,
        Verdict::Allow => AdminAccess::Granted,
        Verdict::Redirect(_) if session.is_authenticated() => AdminAccess::WrongRole,
        Verdict::Redirect(_) => AdminAccess::NotLoggedIn,
    }
}

const SIDEBAR_LINKS: &[(&str, &str)] = &[
    (ADMIN_PATH, "Settings & groups"),
    (CHECKIN_PATH, "Check-in kiosk"),
    (HELP_PATH, "Help"),
];

#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let access = create_memo(move |_| admin_access(&session.get()));

    move || match access.get() {
        AdminAccess::Loading => view! { <LoadingSpinner /> }.into_view(),
        AdminAccess::NotLoggedIn => view! {
            <AccessDenied
                title="Sign-in required"
                message="You must be logged in as an administrator to view this page."
                link_href=LOGIN_PATH
                link_label="Go to sign-in"
            />
        }
        .into_view(),
        AdminAccess::WrongRole => view! {
            <AccessDenied
                title="Access denied"
                message="Your account does not have administrator access."
                link_href=HOME_PATH
                link_label="Back to home"
            />
        }
        .into_view(),
        AdminAccess::Granted => {
            let children = children.clone();
            view! { <AdminShell>{children()}</AdminShell> }.into_view()
        }
    }
}

#[component]
fn AdminShell(children: Children) -> impl IntoView {
    let (session, _) = use_session();
    let user_name = move || {
        session
            .get()
            .user()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };
    let logout = use_logout();

    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <header class="bg-surface-elevated border-b border-border">
                <div class="flex items-center justify-between h-14 px-4">
                    <h1 class="text-lg font-semibold text-fg">"Checkpoint admin"</h1>
                    <div class="flex items-center gap-3 text-sm text-fg-muted">
                        <span>{user_name}</span>
                        <button class="hover:text-fg" on:click=move |_| logout()>
                            "Sign out"
                        </button>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <aside class="w-56 border-r border-border bg-surface-elevated">
                    <nav class="p-4 space-y-1">
                        {SIDEBAR_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="block px-3 py-2 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover">
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                </aside>
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn AccessDenied(
    title: &'static str,
    message: &'static str,
    link_href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 bg-status-warning-bg border border-status-warning-border text-status-warning-text px-6 py-5 rounded">
            <h2 class="font-semibold">{title}</h2>
            <p class="text-sm mt-2">{message}</p>
            <a href=link_href class="inline-block mt-4 text-sm underline">{link_label}</a>
        </div>
    }
}
