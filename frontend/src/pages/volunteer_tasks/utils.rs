use crate::api::{TaskDetail, STATUS_COMPLETED, STATUS_IN_PROGRESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkAuthor {
    Volunteer,
    Admin,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskGroups {
    pub in_progress: Vec<TaskDetail>,
    pub completed: Vec<TaskDetail>,
}

/// Splits a volunteer's tasks by status. Other statuses are dropped.
pub fn group_tasks(tasks: Vec<TaskDetail>) -> TaskGroups {
    let mut groups = TaskGroups::default();
    for task in tasks {
        match task.status.as_str() {
            STATUS_IN_PROGRESS => groups.in_progress.push(task),
            STATUS_COMPLETED => groups.completed.push(task),
            _ => {}
        }
    }
    groups.in_progress.sort_by(|a, b| a.deadline.cmp(&b.deadline));
    groups.completed.sort_by(|a, b| b.task_id.cmp(&a.task_id));
    groups
}

pub fn can_complete(task: &TaskDetail) -> bool {
    task.status == STATUS_IN_PROGRESS
}

/// One entry per stored line; blank lines are skipped.
pub fn remark_lines(log: Option<&str>) -> Vec<String> {
    log.map(|text| {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
pub(crate) fn task(id: i64, status: &str, volunteer_id: Option<i64>) -> TaskDetail {
    use chrono::{TimeZone, Utc};
    let base = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
    TaskDetail {
        task_id: id,
        request_id: id + 100,
        volunteer_id,
        volunteer_name: volunteer_id.map(|_| "Ravi".to_string()),
        photo: "default.png".into(),
        status: status.into(),
        volunteer_remarks: None,
        admin_remarks: None,
        created_at: base,
        deadline: base + chrono::Duration::days(1),
        request_title: format!("Request {}", id),
        request_description: "Needs help".into(),
        location: "Alappuzha".into(),
        requester_name: "Asha".into(),
    }
}
