use crate::{
    api::SystemSettings,
    components::{
        forms::CheckboxField,
        layout::{ErrorMessage, FlashMessages, LoadingSpinner},
    },
    pages::admin::view_model::SettingsViewModel,
};
use leptos::*;

#[component]
pub fn SettingsSection() -> impl IntoView {
    let vm = SettingsViewModel::new();
    let draft = vm.draft;
    let resource = vm.resource;
    let saving = vm.save_action.pending();

    let toggle = move |apply: fn(&mut SystemSettings, bool)| {
        Callback::new(move |value: bool| draft.update(|s| apply(s, value)))
    };
    let photo_required = Signal::derive(move || draft.with(|s| s.visitor_photo_required));
    let training_required = Signal::derive(move || draft.with(|s| s.training_required));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-semibold text-fg">"Check-in settings"</h3>
            <FlashMessages success=vm.success error=vm.error />
            {move || match resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(_)) => ().into_view(),
            }}
            <CheckboxField
                id="visitor-photo-required"
                label="Require a visitor photo at check-in"
                checked=photo_required
                on_toggle=toggle(|s, v| s.visitor_photo_required = v)
            />
            <CheckboxField
                id="training-required"
                label="Require site training after check-in"
                checked=training_required
                on_toggle=toggle(|s, v| s.training_required = v)
            />
            <div class="flex gap-2">
                <button
                    class="py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    disabled=move || !vm.can_save()
                    on:click=move |_| vm.save()
                >
                    {move || if saving.get() { "Saving..." } else { "Save settings" }}
                </button>
                <button
                    class="py-2 px-4 rounded-md border border-border text-fg"
                    disabled=move || saving.get()
                    on:click=move |_| vm.refresh()
                >
                    "Refresh"
                </button>
            </div>
        </section>
    }
}
