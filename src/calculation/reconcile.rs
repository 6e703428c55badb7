//! The per-day reconciliation pipeline.
//!
//! For every date in the requested range: extract raw slot values from the
//! day's punches, resolve the exceptions that match the date, backfill
//! missing slots, then compute lateness, day credit and remarks from the
//! final values. Dates are independent of one another; the only cross-day
//! work is summing the totals.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    AttendanceReport, ClockTime, DailyAttendanceRow, EmployeeKeys, ExceptionRecord, PunchEvent,
    ReconcileOutcome, ShiftWindow,
};

use super::backfill::backfill;
use super::date_range::DateRange;
use super::day_credit::{DayContext, compute_day_credit};
use super::exception_resolver::{holiday_label, resolve_day};
use super::lateness::compute_lateness;
use super::remarks::{RemarkContext, compose_remarks};
use super::time_utils::is_weekend;
use super::totals::compute_totals;
use super::window_extractor::{bucket_punches, extract_day};

/// Everything one reconciliation run needs.
///
/// "Today" is part of the input so that the same input always yields the
/// same rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileInput {
    /// The employee being reconciled.
    pub employee: EmployeeKeys,
    /// First date of the range.
    pub date_from: NaiveDate,
    /// Last date of the range, inclusive.
    pub date_to: NaiveDate,
    /// The current date; only earlier dates can be marked absent.
    pub today: NaiveDate,
    /// The employee's schedule; `None` means unscheduled.
    pub shift: Option<ShiftWindow>,
    /// Raw punches, in any order.
    #[serde(default)]
    pub punches: Vec<PunchEvent>,
    /// Exception records of every kind.
    #[serde(default)]
    pub exceptions: Vec<ExceptionRecord>,
}

/// Computes one attendance row.
///
/// # Arguments
///
/// * `date` - The date of the row
/// * `punches` - That date's punch times
/// * `shift` - The employee's schedule
/// * `exceptions` - Candidate exception records of every kind
/// * `keys` - The employee's identifiers
/// * `today` - The current date
/// * `config` - Engine configuration
pub fn reconcile_day(
    date: NaiveDate,
    punches: &[ClockTime],
    shift: &ShiftWindow,
    exceptions: &[ExceptionRecord],
    keys: &EmployeeKeys,
    today: NaiveDate,
    config: &EngineConfig,
) -> DailyAttendanceRow {
    let raw = extract_day(punches, shift, &config.fallback_windows);
    let day = resolve_day(exceptions, date, keys);
    let filled = backfill(&raw, &day.out_of_office, day.approved_fix_log(), shift);

    let late_minutes = compute_lateness(&filled.slots, &filled.provenance, shift, &config.lateness);

    let weekend = is_weekend(date);
    let credit = compute_day_credit(
        &filled.slots,
        shift,
        &DayContext {
            override_kind: day.override_kind(),
            non_working_day: weekend || day.has_holiday(),
        },
    );

    let remarks = compose_remarks(
        &RemarkContext {
            date,
            today,
            punch_count: punches.len(),
            captured_slots: filled.slots.count_present(),
            active_slots: shift.active_count(),
            day: &day,
        },
        &config.remarks,
    );

    let holiday_names = day.holiday_names();
    debug!(
        %date,
        punches = punches.len(),
        late_minutes,
        credit = %credit.credit,
        rule = ?credit.rule,
        "reconciled day"
    );

    DailyAttendanceRow {
        date,
        slots: filled.slots,
        late_minutes,
        day_credit: credit.credit,
        credit_rule: credit.rule,
        remarks,
        provenance: filled.provenance,
        is_weekend: weekend,
        holiday_label: holiday_label(&holiday_names),
        holiday_names,
        matched_records: day.matched_records(),
    }
}

/// Reconciles an employee's attendance over a date range.
///
/// # Returns
///
/// [`ReconcileOutcome::Unscheduled`] when the input has no shift; otherwise
/// a report with exactly one row per date in the range, ascending.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDateRange`] when the range is
/// inverted or longer than `config.range.max_days`. Bad individual punches or
/// records never fail the run.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::{ReconcileInput, reconcile};
/// use dtr_engine::config::EngineConfig;
/// use dtr_engine::models::{EmployeeKeys, PunchEvent, ShiftAssignment, ShiftMode, ShiftWindow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftWindow::from_assignments(&[ShiftAssignment {
///     name: "Regular".to_string(),
///     mode: ShiftMode::Ampm,
///     check_in: "08:00".parse().ok(),
///     check_in_window: None,
///     check_out: "17:00".parse().ok(),
///     check_out_window: None,
///     credit: None,
/// }]);
///
/// let input = ReconcileInput {
///     employee: EmployeeKeys::new(None, Some("42".to_string())),
///     date_from: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
///     date_to: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
///     today: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     shift,
///     punches: vec![
///         PunchEvent::new("42", "2025-01-13 08:05:00"),
///         PunchEvent::new("42", "2025-01-13 17:02:00"),
///     ],
///     exceptions: vec![],
/// };
///
/// let outcome = reconcile(&input, &EngineConfig::default()).unwrap();
/// let report = outcome.report().unwrap();
/// assert_eq!(report.rows.len(), 5);
/// assert_eq!(report.rows[0].late_minutes, 5);
/// assert_eq!(report.totals.day_credit, Decimal::ONE);
/// ```
pub fn reconcile(input: &ReconcileInput, config: &EngineConfig) -> EngineResult<ReconcileOutcome> {
    let started = Instant::now();
    let range = DateRange::new(input.date_from, input.date_to, config.range.max_days)?;

    let Some(shift) = &input.shift else {
        info!(
            employee = input.employee.display_key(),
            "employee has no shift assignment; skipping computation"
        );
        return Ok(ReconcileOutcome::Unscheduled {
            employee: input.employee.clone(),
        });
    };

    let buckets = bucket_punches(&input.punches, &input.employee, &range);
    let rows: Vec<DailyAttendanceRow> = range
        .iter()
        .map(|date| {
            let punches = buckets.get(&date).map(Vec::as_slice).unwrap_or_default();
            reconcile_day(
                date,
                punches,
                shift,
                &input.exceptions,
                &input.employee,
                input.today,
                config,
            )
        })
        .collect();

    let totals = compute_totals(
        &rows,
        &input.exceptions,
        &input.employee,
        &range,
        config.totals.minutes_per_day,
    );

    info!(
        employee = input.employee.display_key(),
        from = %range.from(),
        to = %range.to(),
        rows = rows.len(),
        late_minutes = totals.late_minutes,
        day_credit = %totals.day_credit,
        elapsed_us = micros(started.elapsed()),
        "reconciliation complete"
    );

    Ok(ReconcileOutcome::Scheduled(AttendanceReport {
        employee: input.employee.clone(),
        shift_name: shift.name.clone(),
        date_from: range.from(),
        date_to: range.to(),
        rows,
        totals,
    }))
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
