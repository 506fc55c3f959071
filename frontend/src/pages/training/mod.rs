pub mod detail;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use detail::TrainingDetailPanel;
pub use panel::TrainingListPanel;

use crate::components::guard::RequireCheckin;
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn TrainingListPage() -> impl IntoView {
    view! {
        <RequireCheckin>
            {|| view! { <TrainingListPanel /> }}
        </RequireCheckin>
    }
}

#[component]
pub fn TrainingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let training_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        <RequireCheckin>
            {move || view! { <TrainingDetailPanel training_id=training_id() /> }}
        </RequireCheckin>
    }
}
