//! Relative timestamp formatting shared by blocks and transfer events.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Returns a human-readable string describing how long ago `timestamp` was.
///
/// The format varies based on the time elapsed:
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
/// - Less than 1 day: "Xh ago" (e.g., "3h ago")
/// - 1 day or more: "Xd ago" (e.g., "7d ago")
///
/// Timestamps in the future are clamped to "just now".
#[must_use]
pub fn time_ago(timestamp: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let diff = (now - timestamp).max(0);

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_magnitude() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(time_ago(now), "just now");
        assert_eq!(time_ago(now - 300), "5m ago");
        assert_eq!(time_ago(now - 3 * 3600), "3h ago");
        assert_eq!(time_ago(now - 7 * 86400), "7d ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(time_ago(now + 600), "just now");
    }
}
