//! Timestamp presentation for pull-request views.

use chrono::{DateTime, Utc};

/// Coarse age for the list view: `3d ago`, `5h ago`, `12m ago`, or `now`.
///
/// Each unit is floored independently; future timestamps read `now`.
pub fn relative_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created);

    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "now".to_string()
    }
}

/// Full timestamp for the detail view, e.g. `Jan 5, 2026, 02:30 PM`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}
