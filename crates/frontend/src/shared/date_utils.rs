/// Utilities for date and time formatting
///
/// Absolute timestamps use the long localized form (`March 15, 2024 2:02 PM`),
/// relative ones the "n units ago" form with rounding thresholds matching
/// what users of the console are used to.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (`2016-01-01T00:00:00Z`), the web API form with a
/// colon-less offset (`2016-01-01T00:00:00+0100`) and bare dates, taken as
/// midnight UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format an instant in `tz` as `January 1, 2016 12:00 AM`
pub fn format_absolute<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format("%B %-d, %Y %-I:%M %p")
        .to_string()
}

/// Describe `instant` relative to `now`: `a few seconds ago`, `3 days ago`,
/// `in 2 hours`...
pub fn format_relative(instant: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let millis = now.signed_duration_since(*instant).num_milliseconds();
    let span = describe_span(millis.unsigned_abs() as f64 / 1000.0);
    if millis >= 0 {
        format!("{} ago", span)
    } else {
        format!("in {}", span)
    }
}

fn describe_span(abs_seconds: f64) -> String {
    const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;
    const DAYS_PER_YEAR: f64 = 146_097.0 / 400.0;

    let seconds = abs_seconds.round();
    let minutes = (abs_seconds / 60.0).round();
    let hours = (abs_seconds / 3_600.0).round();
    let days_exact = abs_seconds / 86_400.0;
    let days = days_exact.round();
    let months = (days_exact / DAYS_PER_MONTH).round();
    let years = (days_exact / DAYS_PER_YEAR).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}
