use leptos::*;

use crate::api::{
    Disaster, TaskDetail, STATUS_ACCEPTED, STATUS_ACTIVE, STATUS_ALLOCATED, STATUS_APPROVED,
    STATUS_CANCELLED, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING, STATUS_REJECTED,
    STATUS_RESOLVED,
};
use crate::utils::time::format_datetime;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <div class="px-4 py-5 sm:p-6">
            <dt class="text-sm font-medium text-fg-muted truncate">{label}</dt>
            <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
        </div>
    };
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            {match href {
                Some(href) => view! { <a href=href class="block hover:bg-surface-muted">{body}</a> }.into_view(),
                None => body.into_view(),
            }}
        </div>
    }
}

/// Maps a lifecycle status to its badge colour.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        STATUS_PENDING | "UNREAD" => "bg-status-warning-bg text-status-warning-text",
        STATUS_APPROVED | STATUS_ACCEPTED | STATUS_ALLOCATED | STATUS_COMPLETED | STATUS_RESOLVED
        | STATUS_ACTIVE | "READ" => "bg-status-success-bg text-status-success-text",
        STATUS_REJECTED | STATUS_CANCELLED | "BLOCKED" | "FLAGGED" => {
            "bg-status-error-bg text-status-error-text"
        }
        STATUS_IN_PROGRESS => "bg-status-info-bg text-status-info-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!(
        "inline-flex items-center px-2 py-0.5 rounded text-xs font-medium {}",
        status_badge_class(&status)
    );
    let label = status.replace('_', " ");
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn DisasterCard(disaster: Disaster) -> impl IntoView {
    let reported = format_datetime(&disaster.reported_at);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <div class="flex items-center justify-between gap-2">
                <h3 class="text-base font-semibold text-fg">{disaster.name.clone()}</h3>
                <StatusBadge status=disaster.status.clone() />
            </div>
            <p class="text-sm text-fg-muted">
                {format!("{} · {} severity · {}", disaster.disaster_type, disaster.severity, disaster.location)}
            </p>
            <p class="text-sm text-fg">{disaster.description.clone()}</p>
            <p class="text-xs text-fg-muted">{format!("Reported {}", reported)}</p>
        </div>
    }
}

/// Summary of a task and the request behind it. `children` renders the actions row.
#[component]
pub fn TaskCard(task: TaskDetail, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <div class="flex items-center justify-between gap-2">
                <h3 class="text-base font-semibold text-fg">{task.request_title.clone()}</h3>
                <StatusBadge status=task.status.clone() />
            </div>
            <p class="text-sm text-fg">{task.request_description.clone()}</p>
            <p class="text-sm text-fg-muted">
                {format!("{} · requested by {}", task.location, task.requester_name)}
            </p>
            <p class="text-xs text-fg-muted">
                {format!("Deadline {}", format_datetime(&task.deadline))}
                {task.volunteer_name.clone().map(|name| format!(" · assigned to {}", name))}
            </p>
            {children.map(|children| view! {
                <div class="flex flex-wrap gap-2 pt-2">{children()}</div>
            })}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::Utc;

    #[test]
    fn disaster_card_shows_summary_line() {
        let html = render_to_string(move || {
            let disaster = Disaster {
                disaster_id: 1,
                name: "Periyar flood".into(),
                description: "Water level rising".into(),
                location: "Aluva".into(),
                disaster_type: "FLOOD".into(),
                severity: "HIGH".into(),
                status: "ACTIVE".into(),
                reported_at: Utc::now(),
            };
            view! { <DisasterCard disaster=disaster /> }
        });
        assert!(html.contains("Periyar flood"));
        assert!(html.contains("HIGH severity"));
    }

    #[test]
    fn stat_card_renders_value() {
        let html = render_to_string(move || {
            view! { <StatCard label="Active disasters" value=Signal::derive(|| "4".to_string()) /> }
        });
        assert!(html.contains("Active disasters"));
        assert!(html.contains('4'));
    }

    #[test]
    fn task_card_renders_actions_and_assignee() {
        let html = render_to_string(move || {
            let task = TaskDetail {
                task_id: 9,
                request_id: 4,
                volunteer_id: Some(2),
                volunteer_name: Some("Ravi".into()),
                photo: String::new(),
                status: "IN_PROGRESS".into(),
                volunteer_remarks: None,
                admin_remarks: None,
                created_at: Utc::now(),
                deadline: Utc::now(),
                request_title: "Boat needed".into(),
                request_description: "Family stranded on roof".into(),
                location: "Kuttanad".into(),
                requester_name: "Asha".into(),
            };
            view! { <TaskCard task=task><button>"Complete"</button></TaskCard> }
        });
        assert!(html.contains("Boat needed"));
        assert!(html.contains("assigned to Ravi"));
        assert!(html.contains("Complete"));
        assert!(html.contains("IN PROGRESS"));
    }
}
