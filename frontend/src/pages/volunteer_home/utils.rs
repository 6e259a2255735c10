use crate::api::{TaskDetail, STATUS_IN_PROGRESS};

/// Tasks the volunteer is still working on, nearest deadline first.
pub fn ongoing_tasks(mut tasks: Vec<TaskDetail>) -> Vec<TaskDetail> {
    tasks.retain(|t| t.status == STATUS_IN_PROGRESS);
    tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline));
    tasks
}

/// Unclaimed tasks, most urgent first.
pub fn open_tasks(mut tasks: Vec<TaskDetail>) -> Vec<TaskDetail> {
    tasks.retain(|t| t.volunteer_id.is_none());
    tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.task_id.cmp(&b.task_id)));
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::volunteer_tasks::utils::task;
    use chrono::Duration;

    #[test]
    fn ongoing_keeps_in_progress_by_deadline() {
        let mut late = task(1, STATUS_IN_PROGRESS, Some(2));
        late.deadline += Duration::days(3);
        let soon = task(2, STATUS_IN_PROGRESS, Some(2));
        let done = task(3, "COMPLETED", Some(2));

        let ids: Vec<i64> = ongoing_tasks(vec![late, done, soon])
            .into_iter()
            .map(|t| t.task_id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn open_tasks_drop_claimed_ones() {
        let mut later = task(4, "PENDING", None);
        later.deadline += Duration::hours(6);
        let urgent = task(5, "PENDING", None);
        let claimed = task(6, STATUS_IN_PROGRESS, Some(2));

        let ids: Vec<i64> = open_tasks(vec![later, claimed, urgent])
            .into_iter()
            .map(|t| t.task_id)
            .collect();
        assert_eq!(ids, vec![5, 4]);
    }
}
