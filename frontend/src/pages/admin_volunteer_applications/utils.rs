use crate::api::{VolunteerApplicationView, STATUS_PENDING};
use crate::utils::text::matches_search;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationGroups {
    pub pending: Vec<VolunteerApplicationView>,
    pub others: Vec<VolunteerApplicationView>,
}

/// Applies the search first, then splits by review state. Newest first.
pub fn filter_and_split(applications: Vec<VolunteerApplicationView>, search: &str) -> ApplicationGroups {
    let mut matching: Vec<VolunteerApplicationView> = applications
        .into_iter()
        .filter(|a| {
            matches_search(
                search,
                &[&a.username, &a.email, &a.location, &a.description],
            )
        })
        .collect();
    matching.sort_by(|a, b| b.application_date.cmp(&a.application_date));
    let (pending, others) = matching
        .into_iter()
        .partition(|a| a.status == STATUS_PENDING);
    ApplicationGroups { pending, others }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn application(id: i64, status: &str, username: &str, location: &str) -> VolunteerApplicationView {
        VolunteerApplicationView {
            application_id: id,
            user_id: id,
            description: "Can cook for shelters".into(),
            status: status.into(),
            application_date: Utc::now() - Duration::hours(id),
            username: username.into(),
            email: format!("{}@example.com", username.to_lowercase()),
            phone_number: String::new(),
            location: location.into(),
        }
    }

    #[test]
    fn search_applies_before_split() {
        let groups = filter_and_split(
            vec![
                application(1, STATUS_PENDING, "Ravi", "Kochi"),
                application(2, "APPROVED", "Meera", "kochi east"),
                application(3, STATUS_PENDING, "Anil", "Kollam"),
            ],
            "KOCHI",
        );
        assert_eq!(groups.pending.len(), 1);
        assert_eq!(groups.pending[0].username, "Ravi");
        assert_eq!(groups.others.len(), 1);
        assert_eq!(groups.others[0].username, "Meera");
    }

    #[test]
    fn blank_search_keeps_all_newest_first() {
        let groups = filter_and_split(
            vec![
                application(3, STATUS_PENDING, "Anil", "Kollam"),
                application(1, STATUS_PENDING, "Ravi", "Kochi"),
            ],
            "  ",
        );
        let ids: Vec<i64> = groups.pending.iter().map(|a| a.application_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(groups.others.is_empty());
    }
}
