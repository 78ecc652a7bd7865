//! Date Display Helpers
//!
//! Relative formatting for task timestamps.

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now` for the task meta line.
///
/// Same calendar day reads "Today", the day before "Yesterday", anything
/// within a week "n days ago", older dates fall back to an absolute date.
/// Future timestamps (server clock ahead of the browser) clamp to "Today".
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now
        .date_naive()
        .signed_duration_since(date.date_naive())
        .num_days();

    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn same_day_is_today() {
        assert_eq!(format_relative(at(2024, 3, 10, 8), at(2024, 3, 10, 23)), "Today");
    }

    #[test]
    fn previous_day_is_yesterday() {
        // calendar-day difference, not a 24h window
        assert_eq!(format_relative(at(2024, 3, 9, 23), at(2024, 3, 10, 0)), "Yesterday");
    }

    #[test]
    fn recent_dates_are_days_ago() {
        assert_eq!(format_relative(at(2024, 3, 7, 12), at(2024, 3, 10, 12)), "3 days ago");
        assert_eq!(format_relative(at(2024, 3, 4, 12), at(2024, 3, 10, 12)), "6 days ago");
    }

    #[test]
    fn older_dates_fall_back_to_absolute() {
        assert_eq!(format_relative(at(2024, 3, 3, 12), at(2024, 3, 10, 12)), "Mar 3, 2024");
        assert_eq!(format_relative(at(2023, 12, 25, 0), at(2024, 3, 10, 12)), "Dec 25, 2023");
    }

    #[test]
    fn future_timestamps_clamp_to_today() {
        assert_eq!(format_relative(at(2024, 3, 11, 1), at(2024, 3, 10, 23)), "Today");
    }
}
