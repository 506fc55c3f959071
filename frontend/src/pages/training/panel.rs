use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::training::{
        utils::{progress_label, TrainingOverview, TrainingRow},
        view_model::TrainingListViewModel,
    },
    router::{training_detail_path, COMPLETION_PATH},
};
use leptos::*;

#[component]
pub fn TrainingListPanel() -> impl IntoView {
    let vm = TrainingListViewModel::new();
    let overview = vm.overview;

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Site training"</h2>
                    <button class="text-sm text-fg-muted hover:text-fg" on:click=move |_| vm.refresh()>
                        "Refresh"
                    </button>
                </div>
                {move || match overview.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(data)) => view! { <TrainingOverviewView overview=data /> }.into_view(),
                }}
            </div>
        </Layout>
    }
}

#[component]
pub fn TrainingOverviewView(overview: TrainingOverview) -> impl IntoView {
    let percentage = overview.percentage();
    let label = progress_label(&overview);
    let ready = overview.ready_for_summary();
    let rows = overview.rows();
    let empty = rows.is_empty();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <p class="text-sm text-fg-muted">{label}</p>
                <div class="w-full h-2 bg-border rounded mt-2">
                    <div
                        class="h-2 bg-action-primary-bg rounded"
                        style=format!("width: {}%", percentage)
                    ></div>
                </div>
            </div>
            {empty.then(|| view! {
                <p class="text-sm text-fg-muted">"There are no active trainings right now."</p>
            })}
            <ol class="divide-y divide-border">
                {rows.into_iter().map(|row| view! { <TrainingRowView row=row /> }).collect_view()}
            </ol>
            {ready.then(|| view! {
                <a
                    href=COMPLETION_PATH
                    class="inline-block py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg"
                >
                    "View completion summary"
                </a>
            })}
        </div>
    }
}

#[component]
fn TrainingRowView(row: TrainingRow) -> impl IntoView {
    let status = if row.completed {
        "Completed"
    } else if row.locked {
        "Locked"
    } else {
        "Available"
    };
    let title = format!("{}. {}", row.position, row.training.title);
    let href = training_detail_path(&row.training.id);

    view! {
        <li class="flex items-center justify-between py-3">
            {if row.locked {
                view! { <span class="text-fg-muted">{title}</span> }.into_view()
            } else {
                view! { <a href=href class="text-fg hover:underline">{title}</a> }.into_view()
            }}
            <span class="text-xs uppercase text-fg-muted">{status}</span>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::training::utils::fixtures::trainings;
    use crate::test_support::ssr::render_to_string;

    fn render(overview: TrainingOverview) -> String {
        render_to_string(move || view! { <TrainingOverviewView overview=overview /> })
    }

    #[test]
    fn locked_trainings_are_not_linked() {
        let html = render(TrainingOverview {
            trainings: trainings(&["a", "b"]),
            completed_ids: vec![],
        });
        assert!(html.contains("href=\"/training/a\""));
        assert!(!html.contains("href=\"/training/b\""));
        assert!(html.contains("Locked"));
        assert!(html.contains("0 of 2 trainings complete (0%)"));
        assert!(!html.contains("View completion summary"));
    }

    #[test]
    fn summary_link_appears_when_all_trainings_are_complete() {
        let html = render(TrainingOverview {
            trainings: trainings(&["a", "b"]),
            completed_ids: vec!["a".into(), "b".into()],
        });
        assert!(html.contains("View completion summary"));
        assert!(html.contains("(100%)"));
    }
}
