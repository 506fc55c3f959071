use crate::{
    components::{
        forms::TextField,
        layout::{ErrorMessage, Layout},
    },
    pages::login::view_model::use_login_view_model,
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.pending();
    let email = vm.email;
    let password = vm.password;

    view! {
        <Layout>
            <div class="max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Staff sign-in"</h2>
                    <p class="text-sm text-fg-muted">"Administrators, hosts and security staff."</p>
                </div>
                {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <form class="space-y-4" on:submit=vm.handle_submit()>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        required=true
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        required=true
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                    />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
