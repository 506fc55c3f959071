use crate::pages::admin::{
    components::{groups::GroupsSection, settings::SettingsSection},
    utils::AdminTab,
};
use leptos::*;

#[component]
pub fn AdminPanel(#[prop(optional)] initial_tab: AdminTab) -> impl IntoView {
    let tab = create_rw_signal(initial_tab);

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Administration"</h2>
            <div role="tablist" class="flex gap-2 border-b border-border">
                {AdminTab::ALL
                    .into_iter()
                    .map(|item| view! {
                        <button
                            id=item.id()
                            role="tab"
                            aria-selected=move || (tab.get() == item).to_string()
                            class="px-4 py-2 text-sm text-fg-muted"
                            class:text-fg=move || tab.get() == item
                            on:click=move |_| tab.set(item)
                        >
                            {item.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                AdminTab::Settings => view! { <SettingsSection /> }.into_view(),
                AdminTab::Groups => view! { <GroupsSection /> }.into_view(),
            }}
        </div>
    }
}
