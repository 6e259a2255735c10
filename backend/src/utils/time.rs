use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Deadline assigned to a task created at `created_at`.
pub fn task_deadline(created_at: DateTime<Utc>, deadline_days: i64) -> DateTime<Utc> {
    created_at + Duration::days(deadline_days)
}
