use crate::api::{Disaster, TaskRequest};

pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Submit Request",
        description: "Request assistance for yourself or others",
        href: "/submitrequest",
    },
    QuickAction {
        title: "Request Resources",
        description: "Food, water, medicine and shelter supplies",
        href: "/resourcerequest",
    },
    QuickAction {
        title: "Volunteer",
        description: "Join our volunteer network",
        href: "/volunteer",
    },
    QuickAction {
        title: "Emergency Contact",
        description: "Quick access to emergency numbers",
        href: "/emergencyinfo",
    },
];

/// High-severity alerts lead; ties keep the newest report first.
pub fn alert_order(mut disasters: Vec<Disaster>) -> Vec<Disaster> {
    disasters.sort_by(|a, b| {
        b.is_high_severity()
            .cmp(&a.is_high_severity())
            .then(b.reported_at.cmp(&a.reported_at))
    });
    disasters
}

pub fn newest_requests(mut requests: Vec<TaskRequest>, limit: usize) -> Vec<TaskRequest> {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    requests.truncate(limit);
    requests
}
