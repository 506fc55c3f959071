use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::training::{utils::TrainingRow, view_model::TrainingDetailViewModel},
    router::TRAINING_PATH,
};
use leptos::*;

/// What the detail page can offer for one training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    NotFound,
    Locked(TrainingRow),
    Completed(TrainingRow),
    Ready(TrainingRow),
}

impl DetailState {
    pub fn from_row(row: Option<TrainingRow>) -> Self {
        match row {
            None => DetailState::NotFound,
            Some(row) if row.completed => DetailState::Completed(row),
            Some(row) if row.locked => DetailState::Locked(row),
            Some(row) => DetailState::Ready(row),
        }
    }
}

#[component]
pub fn TrainingDetailPanel(#[prop(into)] training_id: String) -> impl IntoView {
    let vm = TrainingDetailViewModel::new();
    let overview = vm.overview;
    let pending = vm.pending();

    let body = move || {
        let training_id = training_id.clone();
        match overview.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
            Some(Ok(data)) => match DetailState::from_row(data.row(&training_id)) {
                DetailState::NotFound => view! {
                    <ErrorMessage message="This training is not available." />
                }
                .into_view(),
                DetailState::Locked(row) => view! {
                    <TrainingBody row=row>
                        <p class="text-sm text-fg-muted">
                            "Finish the previous training before starting this one."
                        </p>
                    </TrainingBody>
                }
                .into_view(),
                DetailState::Completed(row) => view! {
                    <TrainingBody row=row>
                        <p class="text-sm text-status-success-text">"You have completed this training."</p>
                    </TrainingBody>
                }
                .into_view(),
                DetailState::Ready(row) => {
                    let id = row.training.id.clone();
                    view! {
                        <TrainingBody row=row>
                            <button
                                class="py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| vm.complete(id.clone())
                            >
                                {move || if pending.get() { "Saving..." } else { "Mark as complete" }}
                            </button>
                        </TrainingBody>
                    }
                    .into_view()
                }
            },
        }
    };

    view! {
        <Layout>
            <div class="max-w-3xl mx-auto space-y-4">
                <a href=TRAINING_PATH class="text-sm text-fg-muted hover:text-fg">"Back to trainings"</a>
                {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                {body}
            </div>
        </Layout>
    }
}

#[component]
fn TrainingBody(row: TrainingRow, children: Children) -> impl IntoView {
    view! {
        <article class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <p class="text-xs uppercase text-fg-muted">
                {format!("Training {} ({})", row.position, row.training.kind)}
            </p>
            <h2 class="text-2xl font-bold text-fg">{row.training.title}</h2>
            <p class="text-fg whitespace-pre-line">{row.training.description}</p>
            {children()}
        </article>
    }
}
