use crate::{components::layout::Layout, router::HOME_PATH};
use leptos::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-16 bg-surface-elevated shadow rounded-lg p-6 text-center space-y-3">
                <h2 class="text-xl font-semibold text-fg">"Not authorized"</h2>
                <p class="text-sm text-fg-muted">
                    "Your account does not have access to that page."
                </p>
                <a href=HOME_PATH class="inline-block text-sm underline text-fg">"Back to home"</a>
            </div>
        </Layout>
    }
}
