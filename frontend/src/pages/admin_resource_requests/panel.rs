use super::{repository::AdminResourceRequestsRepository, utils::split_requests};
use crate::{
    api::{ApiClient, ResourceRequestView},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::MessageBanner,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::messages::{track_action, MessageState},
    utils::time::format_date,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminResourceRequestsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminResourceRequestsRepository::new_with_client(Rc::new(api));
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let repo = repository.clone();
    let requests = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let repo = repository.clone();
    let allocate_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.allocate(id).await }
    });
    let reject_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.reject(id).await }
    });
    track_action(allocate_action, messages, reload, |r| {
        format!("Request #{} allocated.", r.request_id)
    });
    track_action(reject_action, messages, reload, |r| {
        format!("Request #{} rejected.", r.request_id)
    });
    let busy = Signal::derive(move || allocate_action.pending().get() || reject_action.pending().get());

    let table = move |list: Vec<ResourceRequestView>, with_actions: bool| {
        view! {
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                            <th class="px-4 py-2">"#"</th>
                            <th class="px-4 py-2">"Requester"</th>
                            <th class="px-4 py-2">"Resource"</th>
                            <th class="px-4 py-2">"Qty"</th>
                            <th class="px-4 py-2">"Location"</th>
                            <th class="px-4 py-2">"Date"</th>
                            <th class="px-4 py-2">"Status"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {list.into_iter().map(|r| {
                            let id = r.request_id;
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{id}</td>
                                    <td class="px-4 py-2 text-sm">
                                        <p class="text-fg">{r.user_name}</p>
                                        <p class="text-fg-muted text-xs">{r.user_email}</p>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">{r.resource_name}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{r.requested_quantity}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{r.location}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{format_date(&r.request_date)}</td>
                                    <td class="px-4 py-2"><StatusBadge status=r.status /></td>
                                    <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                        <Show when=move || with_actions>
                                            <Button
                                                attr:type="button"
                                                disabled=busy
                                                on:click=move |_| allocate_action.dispatch(id)
                                            >
                                                "Accept & allocate"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                attr:type="button"
                                                disabled=busy
                                                on:click=move |_| reject_action.dispatch(id)
                                            >
                                                "Reject"
                                            </Button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Resource Requests" subtitle="Allocate inventory to citizens in need." />
            <MessageBanner messages=messages />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || requests.get().map(|result| match result {
                    Ok(list) => {
                        let groups = split_requests(list);
                        view! {
                            <div class="space-y-8">
                                <section class="space-y-3">
                                    <h3 class="text-lg font-semibold text-fg">
                                        {format!("Pending ({})", groups.pending.len())}
                                    </h3>
                                    {if groups.pending.is_empty() {
                                        view! { <EmptyState title="No pending resource requests" /> }.into_view()
                                    } else {
                                        table(groups.pending, true).into_view()
                                    }}
                                </section>
                                <section class="space-y-3">
                                    <h3 class="text-lg font-semibold text-fg">"Processed"</h3>
                                    {if groups.other.is_empty() {
                                        view! { <EmptyState title="Nothing processed yet" /> }.into_view()
                                    } else {
                                        table(groups.other, false).into_view()
                                    }}
                                </section>
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}
