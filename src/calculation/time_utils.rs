//! Timestamp and calendar helpers.
//!
//! Stored timestamps are read by slicing their text rather than by parsing
//! them into an instant and converting to local time. A punch stored as
//! `2025-01-15T23:50:00.000Z` belongs to 15 January at 23:50 no matter what
//! timezone the engine runs in.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::ClockTime;

/// Extracts the calendar date from a stored timestamp or date string.
///
/// Accepts a leading `YYYY-MM-DD` (anything after it is ignored) or a leading
/// `MM/DD/YYYY`.
///
/// # Arguments
///
/// * `raw` - The stored string
///
/// # Returns
///
/// The date, or `None` when no valid date leads the string.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 1, 15);
/// assert_eq!(parse_calendar_date("2025-01-15T23:50:00.000Z"), expected);
/// assert_eq!(parse_calendar_date("01/15/2025"), expected);
/// assert_eq!(parse_calendar_date("yesterday"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Some(date) = raw.get(..10).and_then(parse_iso_date) {
        return Some(date);
    }
    let head = raw.split([' ', 'T']).next()?;
    let mut parts = head.split('/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year_text = parts.next()?;
    if year_text.len() != 4 || parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year_text.parse().ok()?, month, day)
}

fn parse_iso_date(head: &str) -> Option<NaiveDate> {
    let bytes = head.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::from_ymd_opt(
        head[..4].parse().ok()?,
        head[5..7].parse().ok()?,
        head[8..10].parse().ok()?,
    )
}

/// Extracts the clock time from a stored timestamp or bare time string.
///
/// The time part is whatever follows the first `T` or space; a string with
/// neither is treated as a bare time. Seconds and zone suffixes are ignored.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("2025-01-15 07:58:12").unwrap().to_string(), "07:58");
/// assert_eq!(parse_clock_time("2025-01-15T17:05:00.000Z").unwrap().to_string(), "17:05");
/// assert_eq!(parse_clock_time("8:15").unwrap().to_string(), "08:15");
/// assert!(parse_clock_time("2025-01-15").is_none());
/// ```
pub fn parse_clock_time(raw: &str) -> Option<ClockTime> {
    let raw = raw.trim();
    let time = match raw.find(['T', ' ']) {
        Some(idx) => raw[idx + 1..].trim_start(),
        None => raw,
    };
    let time = match time.find(['+', '-', 'Z']) {
        Some(idx) => &time[..idx],
        None => time,
    };
    ClockTime::parse_hm(time)
}

/// Splits a stored timestamp into its calendar date and clock time.
pub fn parse_timestamp(raw: &str) -> Option<(NaiveDate, ClockTime)> {
    Some((parse_calendar_date(raw)?, parse_clock_time(raw)?))
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether two dates share month and day, ignoring the year.
pub fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Minutes by which `later` follows `earlier`, zero when it does not.
pub fn minutes_after(later: ClockTime, earlier: ClockTime) -> u32 {
    later.minutes().saturating_sub(earlier.minutes())
}
