use super::{
    repository::UsersRepository,
    utils::{can_delete, role_change, role_filter_options, status_toggle, UserFilter, ROLE_FILTER_ALL},
};
use crate::{
    api::{ApiClient, ApiError, UpdateUser, UserResponse, UserRole, UserStatus},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::MessageBanner,
        forms::{SelectField, TextField},
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::{
        auth::use_auth,
        messages::{track_action, MessageState},
    },
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminUserManagementPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));
    let search = create_rw_signal(String::new());
    let role = create_rw_signal(ROLE_FILTER_ALL.to_string());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let users = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let repo = repository.clone();
    let update_action = create_action(move |(id, update): &(i64, UpdateUser)| {
        let repo = repo.clone();
        let (id, update) = (*id, update.clone());
        async move { repo.update(id, update).await }
    });
    let delete_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.delete(id).await.map(|_| id) }
    });
    track_action(update_action, messages, reload, |u| {
        format!("{} is now {} ({}).", u.name, u.role, u.user_status.as_str())
    });
    track_action(delete_action, messages, reload, |_| "User deleted.".to_string());

    let row = move |u: UserResponse| {
        let id = u.user_id;
        let deletable = can_delete(&u, auth.get_untracked().user_id());
        let toggle = status_toggle(&u);
        let current = u.clone();
        let toggle_label = match u.user_status {
            UserStatus::Active => "Block",
            UserStatus::Blocked => "Unblock",
        };
        let on_role_change = move |ev: ev::Event| {
            match role_change(&current, &event_target_value(&ev)) {
                Some(update) => update_action.dispatch((id, update)),
                None => messages.update(|m| m.set_error(ApiError::validation("Role is unchanged"))),
            }
        };
        view! {
            <tr>
                <td class="px-4 py-2 text-sm">
                    <p class="text-fg font-medium">{u.name}</p>
                    <p class="text-fg-muted text-xs">{u.email}</p>
                </td>
                <td class="px-4 py-2 text-sm text-fg-muted">{u.location}</td>
                <td class="px-4 py-2">
                    <select
                        class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm"
                        on:change=on_role_change
                    >
                        {UserRole::ALL.iter().map(|option| view! {
                            <option value=option.as_str() selected=*option == u.role>{option.as_str()}</option>
                        }).collect_view()}
                    </select>
                </td>
                <td class="px-4 py-2"><StatusBadge status=u.user_status.as_str() /></td>
                <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| update_action.dispatch((id, toggle.clone()))
                    >
                        {toggle_label}
                    </Button>
                    <Show when=move || deletable>
                        <Button
                            variant=ButtonVariant::Danger
                            attr:type="button"
                            on:click=move |_| confirm.set(Some(PendingConfirmation::delete(id, "user")))
                        >
                            "Delete"
                        </Button>
                    </Show>
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <PageTitle title="User Management" />
            <MessageBanner messages=messages />
            <div class="grid gap-4 md:grid-cols-3 mb-6">
                <TextField label="Search" value=search placeholder="Name or email" input_type="search" />
                <SelectField label="Role" value=role options=role_filter_options() />
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || users.get().map(|result| match result {
                    Ok(list) => {
                        let filter = UserFilter { search: search.get(), role: role.get() };
                        let visible = filter.apply(list);
                        if visible.is_empty() {
                            return view! { <EmptyState title="No users match" /> }.into_view();
                        }
                        view! {
                            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                                <table class="min-w-full divide-y divide-border">
                                    <thead>
                                        <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                            <th class="px-4 py-2">"User"</th>
                                            <th class="px-4 py-2">"Location"</th>
                                            <th class="px-4 py-2">"Role"</th>
                                            <th class="px-4 py-2">"Status"</th>
                                            <th class="px-4 py-2"></th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        {visible.into_iter().map(row).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| delete_action.dispatch(id))
                confirm_label="Delete"
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn renders_filters() {
        let html = render_as(UserRole::Admin, || view! { <AdminUserManagementPanel /> });
        assert!(html.contains("All roles"));
        assert!(html.contains("Name or email"));
    }
}
