use chrono::{DateTime, Local, NaiveDate, Utc};

/// Renders a server timestamp in the browser's local time.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn local_date(value: &DateTime<Utc>) -> NaiveDate {
    value.with_timezone(&Local).date_naive()
}

/// Parses the value of an `<input type="date">`.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Parses the value of an `<input type="datetime-local">` as local time.
pub fn parse_datetime_local_input(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let naive = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M").ok()?;
    naive
        .and_local_timezone(Local)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

pub fn to_datetime_local_input(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string()
}
