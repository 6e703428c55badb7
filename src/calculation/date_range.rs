//! Bounded inclusive date ranges.

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates.
///
/// Construction enforces the configured length cap, so iterating a range
/// never produces an unbounded number of rows.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::DateRange;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
/// let to = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
/// let range = DateRange::new(from, to, 366).unwrap();
/// assert_eq!(range.len(), 4);
/// assert_eq!(range.iter().last(), Some(to));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting inverted ranges and ranges longer than
    /// `max_days`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `from > to` or the range
    /// spans more than `max_days` dates.
    pub fn new(from: NaiveDate, to: NaiveDate, max_days: u32) -> EngineResult<Self> {
        if from > to {
            warn!(%from, %to, "rejected inverted date range");
            return Err(EngineError::InvalidDateRange {
                from,
                to,
                message: "start is after end".to_string(),
            });
        }
        let days = (to - from).num_days() + 1;
        if days > i64::from(max_days) {
            warn!(%from, %to, days, max_days, "rejected oversized date range");
            return Err(EngineError::InvalidDateRange {
                from,
                to,
                message: format!("spans {} days, limit is {}", days, max_days),
            });
        }
        Ok(Self { from, to })
    }

    /// First date of the range.
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last date of the range.
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of dates in the range.
    pub fn len(&self) -> usize {
        ((self.to - self.from).num_days() + 1) as usize
    }

    /// Always false; a valid range holds at least one date.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `date` lies in the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.from),
            last: self.to,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            current.checked_add_days(Days::new(1))
        } else {
            None
        };
        Some(current)
    }
}
