//! Time utilities: parsing HH:MM, formatting minutes.

/// Format a signed minute count as `[-]HH:MM`.
///
/// Hours are not wrapped at 24: 1500 minutes renders as "25:00".
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Split an `H:M` string into its raw hour and minute components.
/// No range checking here; callers decide what bounds apply.
pub fn parse_hhmm(s: &str) -> Option<(i64, i64)> {
    let (h, m) = s.trim().split_once(':')?;
    let hours = h.trim().parse().ok()?;
    let minutes = m.trim().parse().ok()?;
    Some((hours, minutes))
}
