use crate::api::{TaskRequest, STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};
use crate::utils::{
    text::matches_search,
    time::{local_date, parse_date_input},
};

pub const STATUS_TABS: [&str; 3] = [STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRequestFilter {
    pub search: String,
    pub location: String,
    /// Raw `<input type="date">` value; ignored when blank or unparsable.
    pub created_on: String,
}

impl TaskRequestFilter {
    pub fn matches(&self, request: &TaskRequest) -> bool {
        if !matches_search(
            &self.search,
            &[&request.request_title, &request.request_description],
        ) {
            return false;
        }
        if !matches_search(&self.location, &[&request.location]) {
            return false;
        }
        match parse_date_input(&self.created_on) {
            Some(day) => local_date(&request.created_at) == day,
            None => true,
        }
    }

    /// Keeps matching requests, newest first.
    pub fn apply(&self, requests: Vec<TaskRequest>) -> Vec<TaskRequest> {
        let mut kept: Vec<TaskRequest> = requests.into_iter().filter(|r| self.matches(r)).collect();
        kept.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.request_id.cmp(&a.request_id))
        });
        kept
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Approval and rejection are only offered for requests still under review.
pub fn can_review(request: &TaskRequest) -> bool {
    request.status == STATUS_PENDING
}

#[cfg(test)]
pub(crate) fn task_request(id: i64, status: &str, age_hours: i64) -> TaskRequest {
    use chrono::{Duration, TimeZone, Utc};
    let now = Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap();
    TaskRequest {
        request_id: id,
        user_id: 1,
        request_title: format!("Request {}", id),
        request_description: "Help".into(),
        location: "Kochi".into(),
        photo: None,
        status: status.into(),
        created_at: now - Duration::hours(age_hours),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::format_date;

    #[test]
    fn search_covers_title_and_description() {
        let mut boat = task_request(1, STATUS_PENDING, 1);
        boat.request_title = "Boat rescue".into();
        let mut food = task_request(2, STATUS_PENDING, 2);
        food.request_description = "Need rice and BOATS of water".into();
        let other = task_request(3, STATUS_PENDING, 3);

        let filter = TaskRequestFilter {
            search: "boat".into(),
            ..Default::default()
        };
        let ids: Vec<i64> = filter
            .apply(vec![other, food, boat])
            .iter()
            .map(|r| r.request_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn location_and_date_narrow_results() {
        let mut here = task_request(1, STATUS_PENDING, 1);
        here.location = "Ernakulam North".into();
        let mut elsewhere = task_request(2, STATUS_PENDING, 1);
        elsewhere.location = "Idukki".into();
        let old = {
            let mut r = task_request(3, STATUS_PENDING, 24 * 5);
            r.location = "Ernakulam South".into();
            r
        };

        let filter = TaskRequestFilter {
            location: "ernakulam".into(),
            created_on: format_date(&here.created_at),
            ..Default::default()
        };
        let kept = filter.apply(vec![old, elsewhere, here]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].request_id, 1);
    }

    #[test]
    fn blank_filter_keeps_everything_newest_first() {
        let filter = TaskRequestFilter::default();
        assert!(!filter.is_active());
        let ids: Vec<i64> = filter
            .apply(vec![
                task_request(1, STATUS_PENDING, 5),
                task_request(2, STATUS_PENDING, 1),
                task_request(3, STATUS_PENDING, 3),
            ])
            .iter()
            .map(|r| r.request_id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn only_pending_requests_are_reviewable() {
        assert!(can_review(&task_request(1, STATUS_PENDING, 0)));
        assert!(!can_review(&task_request(1, STATUS_APPROVED, 0)));
        assert!(!can_review(&task_request(1, STATUS_REJECTED, 0)));
    }
}
