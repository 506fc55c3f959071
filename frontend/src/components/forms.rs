use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".into());
    view! {
        <div class="space-y-1">
            <label for=id.clone() class="block text-sm font-medium text-fg">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id.clone()
                name=id
                type=input_type
                required=required
                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label for=id.clone() class="flex items-center gap-2 text-sm text-fg">
            <input
                id=id
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_marks_required_fields() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::from("Acme"));
            view! {
                <TextField
                    id="company"
                    label="Company"
                    value=value
                    on_input=Callback::new(move |v| value.set(v))
                    required=true
                />
            }
        });
        assert!(html.contains("Company"));
        assert!(html.contains(" *"));
        assert!(html.contains("id=\"company\""));
    }

    #[test]
    fn checkbox_field_renders_label() {
        let html = render_to_string(move || {
            let checked = create_rw_signal(true);
            view! {
                <CheckboxField
                    id="training-required"
                    label="Require training"
                    checked=checked
                    on_toggle=Callback::new(move |v| checked.set(v))
                />
            }
        });
        assert!(html.contains("Require training"));
        assert!(html.contains("type=\"checkbox\""));
    }
}
