use crate::{
    api::{Group, GroupMember},
    components::{
        forms::TextField,
        layout::{ErrorMessage, FlashMessages, LoadingSpinner},
    },
    pages::admin::{utils::member_label, view_model::GroupsViewModel},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn GroupsSection() -> impl IntoView {
    let vm = GroupsViewModel::new();
    let form = vm.form;
    let pending = vm.create_action.pending();

    let name = Signal::derive(move || form.with(|f| f.name.clone()));
    let description = Signal::derive(move || form.with(|f| f.description.clone()));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-semibold text-fg">"Create group"</h3>
                <FlashMessages success=vm.success error=vm.error />
                <form class="space-y-4" on:submit=on_submit>
                    <TextField
                        id="group-name"
                        label="Name"
                        required=true
                        value=name
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    />
                    <TextField
                        id="group-description"
                        label="Description"
                        value=description
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                    <button
                        type="submit"
                        class="py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create group" }}
                    </button>
                </form>
            </section>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-fg">"Groups"</h3>
                    <button class="text-sm text-fg-muted hover:text-fg" on:click=move |_| vm.refresh()>
                        "Refresh"
                    </button>
                </div>
                {move || match vm.groups.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(groups)) => view! { <GroupList groups=groups vm=vm /> }.into_view(),
                }}
                {move || vm.selected.get().map(|name| view! { <MemberList group_name=name vm=vm /> })}
            </section>
        </div>
    }
}

#[component]
fn GroupList(groups: Vec<Group>, vm: GroupsViewModel) -> impl IntoView {
    if groups.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"No groups yet."</p> }.into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {groups
                .into_iter()
                .map(|group| {
                    let name = group.name.clone();
                    let is_selected = {
                        let name = name.clone();
                        move || vm.selected.get().as_deref() == Some(name.as_str())
                    };
                    view! {
                        <li class="py-2">
                            <button
                                class="text-left w-full"
                                class:font-semibold=is_selected
                                on:click=move |_| vm.select(name.clone())
                            >
                                <span class="text-fg">{group.name}</span>
                                <span class="block text-xs text-fg-muted">{group.description}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
fn MemberList(group_name: String, vm: GroupsViewModel) -> impl IntoView {
    let members = vm.members;
    view! {
        <div class="border-t border-border pt-4">
            <h4 class="text-sm font-semibold text-fg">{format!("Members of {}", group_name)}</h4>
            {move || match members.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(list)) => member_rows(list),
            }}
        </div>
    }
}

fn member_rows(members: Vec<GroupMember>) -> View {
    if members.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"This group has no members."</p> }.into_view();
    }
    view! {
        <ul class="text-sm text-fg mt-2 space-y-1">
            {members
                .iter()
                .map(|member| view! { <li>{member_label(member)}</li> })
                .collect_view()}
        </ul>
    }
    .into_view()
}
