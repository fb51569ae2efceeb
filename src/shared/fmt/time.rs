//! Relative "time ago" labels.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Anything `time_ago` accepts as a point in time.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    /// RFC 3339, naive `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD`.
    ///
    /// Naive date-times are read as UTC. Browsers read them as local time, so
    /// the two disagree by the viewer's UTC offset for such strings.
    Text(&'a str),
    /// Unix epoch milliseconds.
    EpochMillis(i64),
    DateTime(DateTime<Utc>),
}

impl DateInput<'_> {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Text(s) => parse_text(s.trim()),
            DateInput::EpochMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms),
            DateInput::DateTime(dt) => Some(*dt),
        }
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s.as_str())
    }
}

impl From<i64> for DateInput<'_> {
    fn from(ms: i64) -> Self {
        DateInput::EpochMillis(ms)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::DateTime(dt)
    }
}

/// Label `date` relative to the current time.
pub fn time_ago<'a>(date: impl Into<DateInput<'a>>) -> String {
    time_ago_at(date, Utc::now())
}

/// Label `date` relative to `now`.
///
/// `just now` under a minute (and for future dates), then `N min`,
/// `N hour(s)`, `N day(s)`, `N week(s)`; four weeks or more prints the date
/// as `YYYY-MM-DD` (UTC). Unparseable input yields an empty string.
pub fn time_ago_at<'a>(date: impl Into<DateInput<'a>>, now: DateTime<Utc>) -> String {
    let past = match date.into().to_datetime() {
        Some(dt) => dt,
        None => return String::new(),
    };

    let diff_ms = (now - past).num_milliseconds();
    let seconds = diff_ms.div_euclid(1000);
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);
    let weeks = days.div_euclid(7);

    if seconds < 60 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    if hours < 24 {
        return plural(hours, "hour");
    }
    if days < 7 {
        return plural(days, "day");
    }
    if weeks < 4 {
        return plural(weeks, "week");
    }

    past.format("%Y-%m-%d").to_string()
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        time_ago_at(now() - d, now())
    }

    #[test]
    fn test_just_now() {
        assert_eq!(ago(Duration::seconds(0)), "just now");
        assert_eq!(ago(Duration::seconds(30)), "just now");
        assert_eq!(ago(Duration::seconds(59)), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::seconds(90)), "1 min");
        assert_eq!(ago(Duration::minutes(59)), "59 min");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(Duration::minutes(60)), "1 hour");
        assert_eq!(ago(Duration::hours(5)), "5 hours");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::hours(25)), "1 day");
        assert_eq!(ago(Duration::days(6)), "6 days");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(ago(Duration::days(7)), "1 week");
        assert_eq!(ago(Duration::days(27)), "3 weeks");
    }

    #[test]
    fn test_absolute_date_after_four_weeks() {
        assert_eq!(ago(Duration::days(28)), "2024-05-18");
        assert_eq!(ago(Duration::days(400)), "2023-05-12");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(time_ago_at(now() + Duration::hours(3), now()), "just now");
    }

    #[test]
    fn test_text_inputs() {
        assert_eq!(time_ago_at("2024-06-15T11:00:00Z", now()), "1 hour");
        assert_eq!(time_ago_at("2024-06-15T13:00:00+02:00", now()), "1 hour");
        assert_eq!(time_ago_at("2024-06-15T11:58:00", now()), "2 min");
        assert_eq!(time_ago_at("2024-06-13", now()), "2 days");
        assert_eq!(time_ago_at("2024-01-02", now()), "2024-01-02");
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        let parsed = DateInput::from("2024-06-15T11:58:00").to_datetime();
        let expected = DateInput::from("2024-06-15T11:58:00Z").to_datetime();
        assert!(parsed.is_some());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_epoch_millis_input() {
        let ms = (now() - Duration::hours(2)).timestamp_millis();
        assert_eq!(time_ago_at(ms, now()), "2 hours");
    }

    #[test]
    fn test_unparseable_is_empty() {
        assert_eq!(time_ago_at("yesterday-ish", now()), "");
        assert_eq!(time_ago_at(i64::MAX, now()), "");
    }

    #[test]
    fn test_time_ago_uses_current_clock() {
        let recent = Utc::now() - Duration::seconds(5);
        assert_eq!(time_ago(recent), "just now");
    }
}
