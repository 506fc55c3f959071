use crate::{
    components::{
        guard::{ProtectedRoute, RouteRequirement},
        layout::Layout,
    },
    router::HOME_PATH,
};
use leptos::*;

pub const HELP_ROLES: [&str; 3] = ["admin", "staff", "security"];

struct HelpSection {
    title: &'static str,
    items: &'static [&'static str],
}

const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Contractor check-in",
        items: &[
            "Contractors fill in the check-in form on the kiosk; name, company, host and visit date are required.",
            "The host named on the form is notified when the check-in is accepted.",
            "A check-in that fails validation shows the reason and keeps the form filled in.",
        ],
    },
    HelpSection {
        title: "Site training",
        items: &[
            "When training is required, contractors are taken to the training list after checking in.",
            "Trainings unlock in order; each one opens once the previous one is complete.",
            "The completion summary becomes available when every active training is done.",
        ],
    },
    HelpSection {
        title: "Administration",
        items: &[
            "Administrators can switch the training and visitor photo requirements under Settings.",
            "Groups collect staff members; pick a group to see who belongs to it.",
        ],
    },
];

pub fn help_requirement() -> RouteRequirement {
    RouteRequirement::authenticated().with_roles(HELP_ROLES)
}

#[component]
pub fn HelpPanel() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Help"</h2>
                {SECTIONS
                    .iter()
                    .map(|section| view! {
                        <section class="bg-surface-elevated shadow rounded-lg p-6">
                            <h3 class="text-lg font-semibold text-fg">{section.title}</h3>
                            <ul class="list-disc pl-5 mt-2 space-y-1 text-sm text-fg-muted">
                                {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </section>
                    })
                    .collect_view()}
                <a href=HOME_PATH class="text-sm text-fg-muted hover:text-fg">"Back to home"</a>
            </div>
        </Layout>
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <ProtectedRoute requirement=help_requirement()>
            {|| view! { <HelpPanel /> }}
        </ProtectedRoute>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::guard::{evaluate, Verdict};
    use crate::router::UNAUTHORIZED_PATH;
    use crate::state::session::Session;
    use crate::test_support::helpers::user_with_role;

    #[test]
    fn help_admits_staff_roles_only() {
        for role in HELP_ROLES {
            let session = Session::authenticated(user_with_role(role), "tok");
            assert_eq!(evaluate(&session, &help_requirement()), Verdict::Allow);
        }
        let contractor = Session::authenticated(user_with_role("contractor"), "tok");
        assert_eq!(
            evaluate(&contractor, &help_requirement()),
            Verdict::Redirect(UNAUTHORIZED_PATH.into())
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::{provide_session, user_with_role};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn security_staff_see_every_help_section() {
        let html = render_to_string(move || {
            provide_session(Session::authenticated(user_with_role("security"), "tok"));
            view! { <HelpPage /> }
        });
        assert!(html.contains("Contractor check-in"));
        assert!(html.contains("Site training"));
        assert!(html.contains("Administration"));
    }
}
