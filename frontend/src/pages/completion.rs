use crate::{
    components::{guard::RequireCheckin, layout::Layout},
    router::HOME_PATH,
    state::workflow::{use_checkin_progress, CheckinProgress},
    utils::navigation,
};
use leptos::*;

pub fn score_message(score: Option<i32>) -> Option<String> {
    score.map(|score| format!("Your last training score: {}%", score))
}

/// Ends the visit on this device and returns to the landing page.
pub fn return_home(progress: &CheckinProgress) {
    if let Err(err) = progress.finish() {
        log::warn!("could not clear check-in progress: {}", err);
    }
    navigation::redirect(HOME_PATH);
}

#[component]
pub fn CompletionPanel() -> impl IntoView {
    let progress = use_checkin_progress();
    let score = score_message(progress.last_score());

    view! {
        <Layout>
            <div class="max-w-xl mx-auto bg-surface-elevated shadow rounded-lg p-8 text-center space-y-4">
                <h2 class="text-2xl font-bold text-fg">"You're all set"</h2>
                <p class="text-fg-muted">
                    "Your check-in is complete. Please wait for your host at reception."
                </p>
                {score.map(|message| view! { <p class="text-lg text-fg">{message}</p> })}
                <button
                    class="py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg"
                    on:click=move |_| return_home(&progress)
                >
                    "Return home"
                </button>
            </div>
        </Layout>
    }
}

#[component]
pub fn CompletionPage() -> impl IntoView {
    view! {
        <RequireCheckin>
            {|| view! { <CompletionPanel /> }}
        </RequireCheckin>
    }
}
