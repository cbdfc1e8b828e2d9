//! Epoch time helpers for filtering and display.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current epoch time in milliseconds.
///
/// This is the `now` the filter predicate compares item clocks
/// against.
pub fn epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Format an item's age for display, e.g. "45s", "12m", "3h", "6d".
///
/// Negative ages (clock skew between us and the gateway) display as
/// "now".
pub fn format_age(age_ms: i64) -> String {
    if age_ms < 0 {
        return "now".to_string();
    }
    let secs = age_ms / 1000;
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// Age of an epoch-seconds clock relative to `now_ms`, or "-" when the
/// clock is missing or unparsable.
pub fn format_clock_age(clock: &str, now_ms: i64) -> String {
    match clock.trim().parse::<i64>() {
        Ok(secs) => format_age(now_ms - secs * 1000),
        Err(_) => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_pick_the_largest_round_unit() {
        assert_eq!(format_age(0), "0s");
        assert_eq!(format_age(59_000), "59s");
        assert_eq!(format_age(60_000), "1m");
        assert_eq!(format_age(3_599_000), "59m");
        assert_eq!(format_age(7_200_000), "2h");
        assert_eq!(format_age(172_800_000), "2d");
    }

    #[test]
    fn skewed_clocks_read_as_now() {
        assert_eq!(format_age(-5_000), "now");
    }

    #[test]
    fn unparsable_clock_is_a_dash() {
        assert_eq!(format_clock_age("", 1_000_000), "-");
        assert_eq!(format_clock_age("soon", 1_000_000), "-");
        assert_eq!(format_clock_age("900", 950_000), "50s");
    }
}
