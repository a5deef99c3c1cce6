//! Output formatting: console, JSON, and exportable Markdown report.

pub mod console;
pub mod json;
pub mod markdown;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use chrono::{DateTime, Utc};

/// Compact display for large counts: 999, 1.2K, 3.4M, 1B.
pub fn format_compact(value: u64) -> String {
    match value {
        0..=999 => value.to_string(),
        1_000..=999_999 => scaled(value as f64 / 1_000.0, "K"),
        1_000_000..=999_999_999 => scaled(value as f64 / 1_000_000.0, "M"),
        _ => scaled(value as f64 / 1_000_000_000.0, "B"),
    }
}

fn scaled(value: f64, suffix: &str) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, suffix)
    } else {
        format!("{:.1}{}", rounded, suffix)
    }
}

/// Metric display for report cards: zero reads as N/A, everything else
/// compact.
pub fn format_metric(value: u64) -> String {
    if value == 0 {
        "N/A".to_string()
    } else {
        format_compact(value)
    }
}

/// Relative upload age: "3 days ago", "2 weeks ago", then a plain date
/// past a year. `now` is a parameter so output is testable.
pub fn format_age(published_at: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(published_at) else {
        return "unknown".to_string();
    };
    let days = (now - parsed.with_timezone(&Utc)).num_days().max(1);

    if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        parsed.format("%b %-d, %Y").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn compact_small_numbers_pass_through() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn compact_thousands_and_millions() {
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(1_234), "1.2K");
        assert_eq!(format_compact(999_949), "999.9K");
        assert_eq!(format_compact(3_400_000), "3.4M");
        assert_eq!(format_compact(2_000_000_000), "2B");
    }

    #[test]
    fn metric_zero_is_na() {
        assert_eq!(format_metric(0), "N/A");
        assert_eq!(format_metric(1_234), "1.2K");
    }

    #[test]
    fn age_buckets() {
        assert_eq!(format_age("2026-07-30T00:00:00Z", now()), "2 days ago");
        assert_eq!(format_age("2026-07-31T12:00:00Z", now()), "1 day ago");
        assert_eq!(format_age("2026-07-18T00:00:00Z", now()), "2 weeks ago");
        assert_eq!(format_age("2026-05-01T00:00:00Z", now()), "3 months ago");
    }

    #[test]
    fn age_over_a_year_is_a_date() {
        let formatted = format_age("2024-03-05T00:00:00Z", now());
        assert!(formatted.contains("2024"));
        assert!(formatted.contains("Mar"));
    }

    #[test]
    fn age_unparsable_is_unknown() {
        assert_eq!(format_age("garbage", now()), "unknown");
        assert_eq!(format_age("", now()), "unknown");
    }
}
