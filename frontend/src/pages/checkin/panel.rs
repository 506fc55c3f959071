use crate::{
    components::{
        forms::TextField,
        layout::{FlashMessages, Layout},
    },
    pages::checkin::{utils::ContractorField, view_model::use_checkin_view_model},
};
use leptos::*;

#[component]
pub fn CheckinPanel() -> impl IntoView {
    let vm = use_checkin_view_model();
    let form = vm.form;
    let pending = vm.pending();

    let fields = ContractorField::ALL
        .iter()
        .map(|&field| {
            let value = Signal::derive(move || form.with(|f| field.value(f).to_string()));
            let on_input = Callback::new(move |v: String| form.update(|f| *field.slot(f) = v));
            view! {
                <TextField
                    id=field.id()
                    label=field.label()
                    input_type=field.input_type()
                    required=field.is_required()
                    value=value
                    on_input=on_input
                />
            }
        })
        .collect_view();

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-2xl font-bold text-fg mb-1">"Contractor check-in"</h2>
                <p class="text-sm text-fg-muted mb-4">
                    "Tell us who you are and who you are visiting. Fields marked * are required."
                </p>
                <FlashMessages success=vm.success error=vm.error />
                <form class="space-y-4" on:submit=vm.handle_submit()>
                    {fields}
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Check in" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
