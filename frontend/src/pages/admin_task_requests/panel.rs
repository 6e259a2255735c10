use super::{
    repository::AdminTaskRequestsRepository,
    utils::{can_review, TaskRequestFilter, STATUS_TABS},
};
use crate::{
    api::{ApiClient, TaskDetail, TaskRequest, STATUS_APPROVED, STATUS_PENDING},
    components::{
        cards::{StatusBadge, TaskCard},
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::MessageBanner,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    pages::volunteer_tasks::{components::RemarksThread, utils::RemarkAuthor},
    state::messages::{track_action, MessageState},
    utils::time::format_datetime,
};
use leptos::*;
use std::rc::Rc;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

#[component]
pub fn AdminTaskRequestsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminTaskRequestsRepository::new_with_client(Rc::new(api));
    let tab = create_rw_signal(STATUS_PENDING);
    let filter = create_rw_signal(TaskRequestFilter::default());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let requests = create_resource(
        move || (tab.get(), reload.get()),
        move |(status, _)| {
            let repo = repo.clone();
            async move { repo.by_status(status).await }
        },
    );

    let repo = repository.clone();
    let approve_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.approve(id).await }
    });
    let repo = repository.clone();
    let reject_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.reject(id).await }
    });
    let repo = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete(id).await.map(|_| id) }
    });

    track_action(approve_action, messages, reload, |task| {
        format!("Request #{} approved as task #{}.", task.request_id, task.task_id)
    });
    track_action(reject_action, messages, reload, |request| {
        format!("Request #{} rejected.", request.request_id)
    });
    track_action(delete_action, messages, reload, |id| format!("Request #{} deleted.", id));

    let filter_input = move |label: &'static str,
                             kind: &'static str,
                             set: fn(&mut TaskRequestFilter, String),
                             get: fn(&TaskRequestFilter) -> String| {
        view! {
            <label class="block">
                <span class="text-sm font-medium text-fg">{label}</span>
                <input
                    type=kind
                    class=FIELD_CLASS
                    prop:value=move || filter.with(get)
                    on:input=move |ev| filter.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    let row = move |r: TaskRequest| {
        let id = r.request_id;
        let reviewable = can_review(&r);
        view! {
            <tr>
                <td class="px-4 py-2 text-sm">
                    <p class="font-medium text-fg">{r.request_title}</p>
                    <p class="text-fg-muted">{r.request_description}</p>
                </td>
                <td class="px-4 py-2 text-sm text-fg-muted">{r.location}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{format_datetime(&r.created_at)}</td>
                <td class="px-4 py-2"><StatusBadge status=r.status /></td>
                <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                    <Show when=move || reviewable>
                        <Button attr:type="button" on:click=move |_| approve_action.dispatch(id)>"Approve"</Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            attr:type="button"
                            on:click=move |_| reject_action.dispatch(id)
                        >
                            "Reject"
                        </Button>
                    </Show>
                    <Button
                        variant=ButtonVariant::Danger
                        attr:type="button"
                        on:click=move |_| confirm.set(Some(PendingConfirmation::delete(id, "task request")))
                    >
                        "Delete"
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Task Requests" subtitle="Review citizen requests for assistance." />
            <MessageBanner messages=messages />
            <div class="flex gap-2 mb-4" role="tablist">
                {STATUS_TABS
                    .iter()
                    .map(|status| {
                        let status = *status;
                        let class = move || {
                            if tab.get() == status {
                                "px-3 py-1.5 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                            } else {
                                "px-3 py-1.5 rounded-md text-sm text-fg-muted hover:bg-action-ghost-bg-hover"
                            }
                        };
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=class
                                on:click=move |_| {
                                    messages.update(|m| m.clear());
                                    tab.set(status);
                                }
                            >
                                {status}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-4 md:grid-cols-4 items-end mb-4">
                {filter_input("Search", "search", |f, v| f.search = v, |f| f.search.clone())}
                {filter_input("Location", "text", |f, v| f.location = v, |f| f.location.clone())}
                {filter_input("Created on", "date", |f, v| f.created_on = v, |f| f.created_on.clone())}
                <Show when=move || filter.with(|f| f.is_active())>
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| filter.set(TaskRequestFilter::default())
                    >
                        "Clear filters"
                    </Button>
                </Show>
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || requests.get().map(|result| match result {
                    Ok(list) => {
                        let visible = filter.with(|f| f.apply(list));
                        if visible.is_empty() {
                            return view! { <EmptyState title="No task requests match" /> }.into_view();
                        }
                        view! {
                            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                                <table class="min-w-full divide-y divide-border">
                                    <thead>
                                        <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                            <th class="px-4 py-2">"Request"</th>
                                            <th class="px-4 py-2">"Location"</th>
                                            <th class="px-4 py-2">"Created"</th>
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
            <Show when=move || tab.get() == STATUS_APPROVED>
                <VolunteerTaskOverview repository=repository.clone() reload=reload />
            </Show>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| delete_action.dispatch(id))
                confirm_label="Delete"
            />
        </Layout>
    }
}

/// Tasks created from approved requests, with the admin remark log.
#[component]
fn VolunteerTaskOverview(repository: AdminTaskRequestsRepository, reload: RwSignal<u32>) -> impl IntoView {
    let expanded = create_rw_signal(None::<i64>);
    let tasks = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.all_tasks().await }
        },
    );

    let card = move |task: TaskDetail| {
        let id = task.task_id;
        view! {
            <div class="space-y-2">
                <TaskCard task=task>
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| expanded.update(|open| {
                            *open = if *open == Some(id) { None } else { Some(id) }
                        })
                    >
                        "Remarks"
                    </Button>
                </TaskCard>
                <Show when=move || expanded.get() == Some(id)>
                    <RemarksThread task_id=id author=RemarkAuthor::Admin />
                </Show>
            </div>
        }
    };

    view! {
        <section class="mt-8 space-y-3">
            <h3 class="text-lg font-semibold text-fg">"Volunteer tasks"</h3>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || tasks.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! { <EmptyState title="No tasks yet" /> }.into_view(),
                    Ok(list) => view! {
                        <div class="grid gap-4 md:grid-cols-2">{list.into_iter().map(card).collect_view()}</div>
                    }
                    .into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::ssr::render_as;

    #[test]
    fn renders_status_tabs_and_filters() {
        let html = render_as(UserRole::Admin, || view! { <AdminTaskRequestsPanel /> });
        for status in STATUS_TABS {
            assert!(html.contains(status));
        }
        assert!(html.contains("Created on"));
        assert!(!html.contains("Volunteer tasks"));
    }
}
