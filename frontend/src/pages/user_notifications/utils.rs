use crate::api::Notification;
use crate::utils::text::matches_search;

pub const TYPE_FILTER_ALL: &str = "all";

/// Applies the type filter (`all` or a type, case-insensitive) and a search over
/// title and message, newest schedule first.
pub fn filter_notifications(
    notifications: &[Notification],
    type_filter: &str,
    search: &str,
) -> Vec<Notification> {
    let mut filtered: Vec<Notification> = notifications
        .iter()
        .filter(|n| {
            type_filter.eq_ignore_ascii_case(TYPE_FILTER_ALL)
                || n.notification_type.eq_ignore_ascii_case(type_filter)
        })
        .filter(|n| matches_search(search, &[&n.title, &n.message]))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.scheduled_for.cmp(&a.scheduled_for));
    filtered
}

pub fn type_badge_class(notification_type: &str) -> &'static str {
    match notification_type.to_ascii_lowercase().as_str() {
        "emergency" => "bg-status-error-bg text-status-error-text",
        "important" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-status-info-bg text-status-info-text",
    }
}

#[cfg(test)]
pub(crate) fn notification(id: i64, kind: &str, title: &str) -> Notification {
    use chrono::{Duration, Utc};
    Notification {
        id,
        title: title.into(),
        message: format!("{} details", title),
        notification_type: kind.into(),
        target_role: "All".into(),
        scheduled_for: Utc::now() - Duration::minutes(100 - id),
        created_at: Utc::now(),
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> Vec<Notification> {
        vec![
            notification(1, "Emergency", "Evacuate riverbank"),
            notification(2, "Information", "Relief camp timings"),
            notification(3, "emergency", "Dam gates opening"),
        ]
    }

    #[test]
    fn all_keeps_everything_newest_first() {
        let ids: Vec<i64> = filter_notifications(&feed(), "all", "").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn type_filter_ignores_case() {
        let ids: Vec<i64> = filter_notifications(&feed(), "Emergency", "")
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn search_covers_title_and_message() {
        assert_eq!(filter_notifications(&feed(), "all", "CAMP").len(), 1);
        assert_eq!(filter_notifications(&feed(), "all", "details").len(), 3);
        assert!(filter_notifications(&feed(), "Information", "dam").is_empty());
    }
}
