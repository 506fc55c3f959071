pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use crate::components::admin_layout::AdminLayout;
use leptos::*;
pub use panel::AdminPanel;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AdminLayout>
            {|| view! { <AdminPanel /> }}
        </AdminLayout>
    }
}
