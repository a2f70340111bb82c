use chrono::{DateTime, Local};

/// True when both timestamps fall on the same calendar date
/// (year, month, day), regardless of the time of day.
pub fn is_same_date(a: &DateTime<Local>, b: &DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whole calendar days from `a` to `b` (1 for consecutive days).
pub fn days_between(a: &DateTime<Local>, b: &DateTime<Local>) -> i64 {
    (b.date_naive() - a.date_naive()).num_days()
}
