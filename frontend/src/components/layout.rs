use crate::{
    router::{ADMIN_PATH, CHECKIN_PATH, HELP_PATH, HOME_PATH, LOGIN_PATH},
    state::session::{use_logout, use_session},
    utils::lifecycle::Flash,
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _) = use_session();
    let signed_in = move || session.get().is_authenticated();
    let is_admin = move || session.get().role() == Some("admin");
    let logout = use_logout();

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=HOME_PATH class="text-xl font-semibold text-fg">"Checkpoint"</a>
                    <nav class="flex space-x-4">
                        <a href=CHECKIN_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                            "Contractor check-in"
                        </a>
                        <Show when=signed_in>
                            <a href=HELP_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Help"
                            </a>
                        </Show>
                        <Show when=is_admin>
                            <a href=ADMIN_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Admin"
                            </a>
                        </Show>
                        <Show
                            when=signed_in
                            fallback=|| view! {
                                <a href=LOGIN_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                    "Staff sign-in"
                                </a>
                            }
                        >
                            {
                                let logout = logout.clone();
                                view! {
                                    <button
                                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium"
                                        on:click=move |_| logout()
                                    >
                                        "Sign out"
                                    </button>
                                }
                            }
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Renders whichever of the two transient messages is currently set.
#[component]
pub fn FlashMessages(success: Flash, error: Flash) -> impl IntoView {
    view! {
        {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
        {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::{admin_user, provide_session, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_admin_link_for_admins_only() {
        let html = render_to_string(move || {
            provide_session(Session::authenticated(admin_user(), "tok"));
            view! { <Header /> }
        });
        assert!(html.contains("Admin"));
        assert!(html.contains("Sign out"));

        let html = render_to_string(move || {
            provide_session(Session::authenticated(regular_user(), "tok"));
            view! { <Header /> }
        });
        assert!(!html.contains(">Admin<"));
        assert!(html.contains("Help"));
    }

    #[test]
    fn header_offers_sign_in_when_anonymous() {
        let html = render_to_string(move || {
            provide_session(Session::anonymous());
            view! { <Header /> }
        });
        assert!(html.contains("Staff sign-in"));
        assert!(!html.contains("Sign out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(Session::anonymous());
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn flash_messages_render_only_set_messages() {
        let html = render_to_string(move || {
            let success = Flash::new();
            success.show("saved");
            let error = Flash::new();
            view! { <div><FlashMessages success=success error=error /></div> }
        });
        assert!(html.contains("saved"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
