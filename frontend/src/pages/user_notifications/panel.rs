use super::{
    repository::UserNotificationsRepository,
    utils::{filter_notifications, type_badge_class, TYPE_FILTER_ALL},
};
use crate::{
    api::{ApiClient, ApiError, Notification, UserRole, NOTIFICATION_TYPES},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::auth::use_auth,
    utils::time::format_datetime,
};
use leptos::*;
use std::rc::Rc;

pub fn notification_list(items: Vec<Notification>) -> View {
    if items.is_empty() {
        return view! { <EmptyState title="No notifications" description="You're all caught up." /> }
            .into_view();
    }
    view! {
        <ul class="space-y-3">
            {items
                .into_iter()
                .map(|n| view! {
                    <li class="bg-surface-elevated shadow rounded-lg p-4">
                        <div class="flex items-center justify-between gap-2">
                            <h3 class="font-semibold text-fg">{n.title}</h3>
                            <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", type_badge_class(&n.notification_type))>
                                {n.notification_type.clone()}
                            </span>
                        </div>
                        <p class="mt-1 text-sm text-fg">{n.message}</p>
                        <p class="mt-2 text-xs text-fg-muted">{format_datetime(&n.scheduled_for)}</p>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn UserNotificationsPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UserNotificationsRepository::new_with_client(Rc::new(api));

    let type_filter = create_rw_signal(TYPE_FILTER_ALL.to_string());
    let search = create_rw_signal(String::new());
    let reload = create_rw_signal(0u32);

    let feed = create_resource(
        move || (auth.get().role(), reload.get()),
        move |(role, _)| {
            let repo = repository.clone();
            async move {
                match role {
                    Some(role) => repo.feed(role).await,
                    None => Err(ApiError::unknown("Not signed in")),
                }
            }
        },
    );
    let subtitle = move || match auth.get().role() {
        Some(UserRole::Volunteer) => "Updates for volunteers and everyone.",
        _ => "Announcements from the response team.",
    };

    view! {
        <Layout>
            <PageTitle title="Notifications" subtitle=subtitle() />
            <div class="flex flex-col sm:flex-row gap-3 mb-4">
                <select
                    class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                    prop:value=move || type_filter.get()
                    on:change=move |ev| type_filter.set(event_target_value(&ev))
                >
                    <option value=TYPE_FILTER_ALL>"All Notifications"</option>
                    {NOTIFICATION_TYPES
                        .iter()
                        .map(|t| view! { <option value=*t>{*t}</option> })
                        .collect_view()}
                </select>
                <input
                    type="search"
                    placeholder="Search notifications"
                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || feed.get().map(|result| match result {
                    Ok(list) => notification_list(filter_notifications(&list, &type_filter.get(), &search.get())),
                    Err(err) => view! {
                        <div>
                            <ErrorMessage message=err.error />
                            <button
                                class="text-sm font-medium text-link hover:text-link-hover"
                                on:click=move |_| reload.update(|v| *v = v.wrapping_add(1))
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                    .into_view(),
                })}
            </Suspense>
        </Layout>
    }
}
