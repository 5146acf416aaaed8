//! Relative timestamp formatting for chat rows.

const MINUTE_MS: u64 = 60_000;
const HOUR_MS: u64 = 3_600_000;
const DAY_MS: u64 = 86_400_000;

/// Render `then_ms` relative to `now_ms`: "Just now", "Nm ago", "Nh ago",
/// "Nd ago", or a day count past a week. Future timestamps read as now.
pub fn format_timestamp(now_ms: u64, then_ms: u64) -> String {
    let diff = now_ms.saturating_sub(then_ms);
    let mins = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format!("{days} days ago")
    }
}
