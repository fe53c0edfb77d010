use chrono::{DateTime, Utc};

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43200.0;

/// Human distance from `now`, e.g. "3 days ago" or "in about 1 hour".
pub fn format_distance_to_now(date: DateTime<Utc>) -> String {
    format_distance(date, Utc::now())
}

pub fn format_distance(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(date).num_seconds();
    let distance = distance_words(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn distance_words(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round();

    if seconds < 30 {
        return "less than a minute".to_string();
    }
    if minutes < 2.0 {
        return "1 minute".to_string();
    }
    if minutes < 45.0 {
        return format!("{minutes} minutes");
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / 60.0).round();
        return format!("about {hours} hours");
    }
    if minutes < 2520.0 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round();
        return format!("{days} days");
    }
    if minutes < 2.0 * MINUTES_IN_MONTH {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        return format!("about {} {}", months, plural(months, "month"));
    }

    let months = (minutes / MINUTES_IN_MONTH).round() as u64;
    if months < 12 {
        return format!("{months} months");
    }

    let years = months / 12;
    let remainder = months % 12;
    match remainder {
        0..=2 => format!("about {} {}", years, plural(years, "year")),
        3..=8 => format!("over {} {}", years, plural(years, "year")),
        _ => format!("almost {} years", years + 1),
    }
}

fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        format_distance(now() - duration, now())
    }

    #[test]
    fn short_distances() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(70)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(12)), "12 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "about 5 hours ago");
    }

    #[test]
    fn day_and_month_distances() {
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(35)), "about 1 month ago");
        assert_eq!(ago(Duration::days(50)), "about 2 months ago");
        assert_eq!(ago(Duration::days(150)), "5 months ago");
    }

    #[test]
    fn past_two_months_counts_plain_months() {
        assert_eq!(ago(Duration::days(70)), "2 months ago");
        assert_eq!(ago(Duration::days(85)), "3 months ago");
    }

    #[test]
    fn year_distances() {
        assert_eq!(ago(Duration::days(370)), "about 1 year ago");
        assert_eq!(ago(Duration::days(365 + 180)), "over 1 year ago");
        assert_eq!(ago(Duration::days(365 + 330)), "almost 2 years ago");
    }

    #[test]
    fn future_dates_use_in_prefix() {
        assert_eq!(format_distance(now() + Duration::minutes(50), now()), "in about 1 hour");
    }
}
