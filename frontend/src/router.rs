use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        AdminPage, CheckinPage, CompletionPage, HelpPage, HomePage, LoginPage, TrainingDetailPage,
        TrainingListPage, UnauthorizedPage,
    },
    state::session::AuthProvider,
    utils::storage::AppStorage,
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const CHECKIN_PATH: &str = "/checkin";
pub const TRAINING_PATH: &str = "/training";
pub const COMPLETION_PATH: &str = "/checkin/complete";
pub const ADMIN_PATH: &str = "/admin";
pub const HELP_PATH: &str = "/help";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

const TRAINING_DETAIL_ROUTE: &str = "/training/:id";

pub const ROUTE_PATHS: &[&str] = &[
    HOME_PATH,
    LOGIN_PATH,
    CHECKIN_PATH,
    TRAINING_PATH,
    TRAINING_DETAIL_ROUTE,
    COMPLETION_PATH,
    ADMIN_PATH,
    HELP_PATH,
    UNAUTHORIZED_PATH,
];

/// Routes that need a signed-in user with the right role.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[ADMIN_PATH, HELP_PATH];

/// Routes that need a persisted check-in instead of a signed-in user.
pub const CHECKIN_ROUTE_PATHS: &[&str] = &[TRAINING_PATH, TRAINING_DETAIL_ROUTE, COMPLETION_PATH];

pub fn training_detail_path(training_id: &str) -> String {
    format!(
        "{}/{}",
        TRAINING_PATH,
        crate::api::client::encode_segment(training_id)
    )
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(AppStorage::browser());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=CHECKIN_PATH view=CheckinPage/>
                    <Route path=TRAINING_PATH view=TrainingListPage/>
                    <Route path=TRAINING_DETAIL_ROUTE view=TrainingDetailPage/>
                    <Route path=COMPLETION_PATH view=CompletionPage/>
                    <Route path=ADMIN_PATH view=AdminPage/>
                    <Route path=HELP_PATH view=HelpPage/>
                    <Route path=UNAUTHORIZED_PATH view=UnauthorizedPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn guarded_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(CHECKIN_ROUTE_PATHS) {
            assert!(
                all.contains(path),
                "guarded path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn workflow_routes_are_not_login_protected() {
        for path in CHECKIN_ROUTE_PATHS {
            assert!(!PROTECTED_ROUTE_PATHS.contains(path));
        }
    }

    #[test]
    fn training_detail_path_encodes_ids() {
        assert_eq!(training_detail_path("t-1"), "/training/t-1");
        assert_eq!(training_detail_path("a/b"), "/training/a%2Fb");
    }
}
