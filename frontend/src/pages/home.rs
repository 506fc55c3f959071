use crate::{
    components::layout::Layout,
    router::{CHECKIN_PATH, LOGIN_PATH},
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Welcome to Checkpoint"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Contractors check in here before starting work on site."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <a href=CHECKIN_PATH class="flex items-center justify-center px-8 py-3 text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10">
                            "Start check-in"
                        </a>
                        <a href=LOGIN_PATH class="mt-3 sm:mt-0 flex items-center justify-center px-8 py-3 text-base font-medium rounded-md text-fg border border-border lg:py-4 lg:text-lg lg:px-10">
                            "Staff sign-in"
                        </a>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
