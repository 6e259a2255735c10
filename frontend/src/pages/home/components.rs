use super::utils::{alert_order, QUICK_ACTIONS};
use crate::{
    api::{Disaster, TaskRequest},
    components::{cards::StatusBadge, empty_state::EmptyState},
    utils::time::format_datetime,
};
use leptos::*;

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {QUICK_ACTIONS
                .iter()
                .map(|action| view! {
                    <a href=action.href class="bg-surface-elevated rounded-lg shadow p-5 hover:bg-surface-muted block">
                        <h3 class="text-base font-semibold text-fg">{action.title}</h3>
                        <p class="text-sm text-fg-muted mt-1">{action.description}</p>
                    </a>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ActiveAlerts(disasters: Vec<Disaster>) -> impl IntoView {
    if disasters.is_empty() {
        return view! { <EmptyState title="No active disaster alerts" /> }.into_view();
    }
    view! {
        <ul class="space-y-3">
            {alert_order(disasters)
                .into_iter()
                .map(|d| {
                    let class = if d.is_high_severity() {
                        "border-l-4 border-status-error-border bg-status-error-bg p-4 rounded"
                    } else {
                        "border-l-4 border-status-warning-border bg-status-warning-bg p-4 rounded"
                    };
                    view! {
                        <li class=class>
                            <p class="font-semibold text-fg">{format!("{} · {}", d.name, d.location)}</p>
                            <p class="text-sm text-fg-muted">
                                {format!("{} severity, reported {}", d.severity, format_datetime(&d.reported_at))}
                            </p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn MyRequests(requests: Vec<TaskRequest>) -> impl IntoView {
    if requests.is_empty() {
        return view! {
            <EmptyState title="No requests yet" description="Requests you submit will appear here." />
        }
        .into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {requests
                .into_iter()
                .map(|r| view! {
                    <li class="py-3 flex items-center justify-between gap-3">
                        <div>
                            <p class="text-sm font-medium text-fg">{r.request_title}</p>
                            <p class="text-xs text-fg-muted">
                                {format!("{} · {}", r.location, format_datetime(&r.created_at))}
                            </p>
                        </div>
                        <StatusBadge status=r.status />
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
