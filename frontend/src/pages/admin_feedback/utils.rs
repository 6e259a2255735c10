use crate::api::{Feedback, FEEDBACK_STATUSES};

pub const STATUS_FILTER_ALL: &str = "all";
pub const STATUS_READ: &str = "read";
pub const STATUS_FLAGGED: &str = "flagged";

/// Keeps feedback with the chosen status (`all` keeps everything), newest first.
pub fn filter_feedback(mut feedback: Vec<Feedback>, status: &str) -> Vec<Feedback> {
    if status != STATUS_FILTER_ALL {
        feedback.retain(|f| f.status.eq_ignore_ascii_case(status));
    }
    feedback.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feedback
}

pub fn status_filter_options() -> Vec<(String, String)> {
    std::iter::once((STATUS_FILTER_ALL.to_string(), "All".to_string()))
        .chain(FEEDBACK_STATUSES.iter().map(|s| (s.to_string(), capitalize(s))))
        .collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status transitions offered for an item; the current status is never offered.
pub fn next_statuses(feedback: &Feedback) -> Vec<&'static str> {
    [STATUS_READ, STATUS_FLAGGED]
        .into_iter()
        .filter(|s| !feedback.status.eq_ignore_ascii_case(s))
        .collect()
}
