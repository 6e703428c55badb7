//! Range-level totals.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::models::{
    AttendanceTotals, DailyAttendanceRow, EmployeeKeys, ExceptionKind, ExceptionRecord,
    RecordCounts,
};

use super::date_range::DateRange;

/// Counts the distinct approved records of the employee that cover at least
/// one date of the range. Holidays are not counted.
///
/// A record is identified by its kind and reference, so a locator filed for
/// three days counts once, as do rows repeating the same reference.
pub fn count_records(
    records: &[ExceptionRecord],
    keys: &EmployeeKeys,
    range: &DateRange,
) -> RecordCounts {
    let mut seen: BTreeSet<(ExceptionKind, &str)> = BTreeSet::new();
    let mut counts = RecordCounts::default();
    for record in records {
        let kind = record.kind();
        if kind == ExceptionKind::Holiday || !record.is_approved() || !record.belongs_to(keys) {
            continue;
        }
        if !record.dates.iter().any(|date| range.contains(*date)) {
            continue;
        }
        if seen.insert((kind, record.reference.as_str())) {
            counts.add(kind);
        }
    }
    counts
}

/// Sums the rows of a report.
///
/// # Arguments
///
/// * `rows` - The computed rows
/// * `records` - Every exception record supplied for the run
/// * `keys` - The employee's identifiers
/// * `range` - The requested range
/// * `minutes_per_day` - Length of a working day, used to turn late minutes
///   into days
///
/// # Returns
///
/// Totals where `late_equivalent_days` is rounded to two decimals and
/// `net_days` (credit less late-equivalent days, floored at zero) to four.
pub fn compute_totals(
    rows: &[DailyAttendanceRow],
    records: &[ExceptionRecord],
    keys: &EmployeeKeys,
    range: &DateRange,
    minutes_per_day: u32,
) -> AttendanceTotals {
    let late_minutes: u32 = rows.iter().map(|row| row.late_minutes).sum();
    let day_credit: Decimal = rows.iter().map(|row| row.day_credit).sum();

    let late_days = if minutes_per_day == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(late_minutes) / Decimal::from(minutes_per_day)
    };
    let net_days = (day_credit - late_days).max(Decimal::ZERO).round_dp(4);

    AttendanceTotals {
        late_minutes,
        day_credit,
        late_equivalent_days: late_days.round_dp(2),
        net_days,
        records: count_records(records, keys, range),
    }
}
