use super::repository::AdminDashboardRepository;
use crate::{
    api::ApiClient,
    components::{
        cards::{StatCard, StatusBadge},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    utils::time::{format_date, format_datetime},
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminDashboardRepository::new_with_client(Rc::new(api));
    let summary = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.load_summary().await }
        },
    );

    let count = move |pick: fn(&super::utils::DashboardSummary) -> usize| {
        Signal::derive(move || {
            summary
                .get()
                .and_then(|r| r.ok())
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "-".into())
        })
    };

    view! {
        <Layout>
            <PageTitle title="Admin Dashboard" />
            <dl class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4 mb-8">
                <StatCard label="Active disasters" value=count(|s| s.active_disasters) href="/admin/updates" />
                <StatCard label="Pending task requests" value=count(|s| s.pending_task_requests) href="/admin/taskrequests" />
                <StatCard label="Volunteers" value=count(|s| s.volunteers) href="/admin/volunteers" />
                <StatCard label="Pending resource requests" value=count(|s| s.pending_resource_requests) href="/admin/resourcerequests" />
            </dl>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || summary.get().map(|result| match result {
                    Ok(summary) => view! {
                        <div class="grid gap-6 lg:grid-cols-2">
                            <section class="bg-surface-elevated shadow rounded-lg p-6">
                                <h3 class="text-lg font-semibold text-fg mb-3">"Latest task requests"</h3>
                                {if summary.latest_task_requests.is_empty() {
                                    view! { <EmptyState title="No pending task requests" /> }.into_view()
                                } else {
                                    view! {
                                        <ul class="divide-y divide-border">
                                            {summary.latest_task_requests.into_iter().map(|r| view! {
                                                <li class="py-2 flex justify-between gap-2">
                                                    <div>
                                                        <p class="text-sm font-medium text-fg">{r.request_title}</p>
                                                        <p class="text-xs text-fg-muted">
                                                            {format!("{} · {}", r.location, format_datetime(&r.created_at))}
                                                        </p>
                                                    </div>
                                                    <StatusBadge status=r.status />
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    }
                                    .into_view()
                                }}
                            </section>
                            <section class="bg-surface-elevated shadow rounded-lg p-6">
                                <h3 class="text-lg font-semibold text-fg mb-3">"Latest resource requests"</h3>
                                {if summary.latest_resource_requests.is_empty() {
                                    view! { <EmptyState title="No pending resource requests" /> }.into_view()
                                } else {
                                    view! {
                                        <ul class="divide-y divide-border">
                                            {summary.latest_resource_requests.into_iter().map(|r| view! {
                                                <li class="py-2 flex justify-between gap-2">
                                                    <div>
                                                        <p class="text-sm font-medium text-fg">
                                                            {format!("{} × {}", r.resource_name, r.requested_quantity)}
                                                        </p>
                                                        <p class="text-xs text-fg-muted">
                                                            {format!("{} · {}", r.user_name, format_date(&r.request_date))}
                                                        </p>
                                                    </div>
                                                    <StatusBadge status=r.status />
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    }
                                    .into_view()
                                }}
                            </section>
                        </div>
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
    fn renders_stat_cards() {
        let html = render_as(UserRole::Admin, || view! { <AdminDashboardPanel /> });
        assert!(html.contains("Pending task requests"));
        assert!(html.contains("Volunteers"));
    }
}
