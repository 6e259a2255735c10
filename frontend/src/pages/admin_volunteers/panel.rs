use crate::{
    api::{ApiClient, UpdateUser, UserResponse, UserStatus},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::MessageBanner,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    pages::admin_user_management::{
        repository::UsersRepository,
        utils::{status_toggle, volunteers_only},
    },
    state::messages::{track_action, MessageState},
    utils::time::format_date,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminVolunteersPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let repo = repository.clone();
    let volunteers = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await.map(volunteers_only) }
        },
    );

    let toggle_action = create_action(move |(id, update): &(i64, UpdateUser)| {
        let repo = repository.clone();
        let (id, update) = (*id, update.clone());
        async move { repo.update(id, update).await }
    });
    track_action(toggle_action, messages, reload, |u| match u.user_status {
        UserStatus::Blocked => format!("{} has been blocked.", u.name),
        UserStatus::Active => format!("{} has been unblocked.", u.name),
    });

    let card = move |v: UserResponse| {
        let id = v.user_id;
        let update = status_toggle(&v);
        let (label, variant) = match v.user_status {
            UserStatus::Active => ("Block", ButtonVariant::Danger),
            UserStatus::Blocked => ("Unblock", ButtonVariant::Primary),
        };
        view! {
            <div class="bg-surface-elevated shadow rounded-lg p-4 flex items-center justify-between gap-4">
                <div>
                    <p class="font-semibold text-fg">{v.name}</p>
                    <p class="text-xs text-fg-muted">{format!("{} · {}", v.email, v.phone_number)}</p>
                    <p class="text-xs text-fg-muted">
                        {format!("{} · joined {}", v.location, format_date(&v.created_at))}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <StatusBadge status=v.user_status.as_str() />
                    <Button
                        variant=variant
                        attr:type="button"
                        on:click=move |_| toggle_action.dispatch((id, update.clone()))
                    >
                        {label}
                    </Button>
                </div>
            </div>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Volunteers" subtitle="Block or restore volunteer accounts." />
            <MessageBanner messages=messages />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || volunteers.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! { <EmptyState title="No volunteers yet" /> }.into_view(),
                    Ok(list) => view! {
                        <div class="space-y-3">{list.into_iter().map(card).collect_view()}</div>
                    }
                    .into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::ssr::render_as;

    #[test]
    fn renders_page_heading() {
        let html = render_as(UserRole::Admin, || view! { <AdminVolunteersPanel /> });
        assert!(html.contains("Block or restore volunteer accounts."));
    }
}
