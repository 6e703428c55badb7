//! Minute-granularity clock times and inclusive time windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute granularity (`00:00` through `23:59`).
///
/// Punches, nominal shift times and window bounds are all compared at this
/// granularity; seconds in the source data are discarded when parsed.
///
/// # Example
///
/// ```
/// use dtr_engine::models::ClockTime;
///
/// let t: ClockTime = "08:10".parse().unwrap();
/// assert_eq!(t.minutes(), 490);
/// assert_eq!(t.to_string(), "08:10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Builds a clock time from an hour and minute, rejecting out-of-range values.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Builds a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// The hour component.
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// The minute component.
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Parses a bare `H:MM` / `HH:MM` / `HH:MM:SS` string.
    ///
    /// Anything after the minute digits that is not a seconds field is
    /// rejected. Use [`crate::calculation::parse_clock_time`] to pull the time
    /// out of a full timestamp.
    pub fn parse_hm(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let mut parts = raw.splitn(3, ':');
        let hour = parts.next()?;
        let minute = parts.next()?;
        if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if let Some(seconds) = parts.next() {
            let digits = seconds.split('.').next().unwrap_or_default();
            if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }
        Self::from_hm(hour.parse().ok()?, minute.parse().ok()?)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Error returned when a string is not a valid `HH:MM` clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClockTimeError(String);

impl fmt::Display for ParseClockTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid clock time '{}', expected HH:MM", self.0)
    }
}

impl std::error::Error for ParseClockTimeError {}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hm(s).ok_or_else(|| ParseClockTimeError(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// An inclusive clock-time interval.
///
/// A window whose start is after its end contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First accepted minute.
    pub start: ClockTime,
    /// Last accepted minute.
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a window from its bounds as given.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Creates a window covering both points regardless of their order.
    pub fn spanning(a: ClockTime, b: ClockTime) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Whether `time` lies inside the window, bounds included.
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time <= self.end
    }

    /// Whether the start is not after the end.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
