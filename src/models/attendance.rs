//! Computed attendance output: per-day rows, range totals and the report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock_time::ClockTime;
use super::exception::{ApprovalStatus, ExceptionKind};
use super::punch::EmployeeKeys;
use super::slot::SlotValues;

/// Where a final slot value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// A raw punch, or no value at all.
    #[default]
    None,
    /// Synthesized from an approved out-of-office authorization.
    OutOfOffice,
    /// Taken from an approved fix-log correction.
    FixLog,
}

/// Which branch of the day-credit formula produced a row's credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditRule {
    /// Combined-mode shift: half the AMPM weight per present endpoint.
    CombinedMode,
    /// AM-in and the whole PM half, AM-out missing: both weights.
    AmInWithPmPair,
    /// The whole AM half and PM-out, PM-in missing: both weights.
    AmPairWithPmOut,
    /// AM-out and the whole PM half, AM-in missing: half of both weights.
    AmOutWithPmPair,
    /// The whole AM half and PM-in, PM-out missing: half of both weights.
    AmPairWithPmIn,
    /// Only AM-in and PM-out present on a four-slot shift: both weights.
    SpanningInOut,
    /// Complete halves each earn their own weight.
    CompleteHalves,
    /// An approved exception grants a full day.
    Override(ExceptionKind),
    /// Weekend or holiday without attendance earns nothing.
    NonWorkingDay,
}

/// A record that matched a row's date, kept for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRecord {
    /// Record kind.
    pub kind: ExceptionKind,
    /// Record reference.
    pub reference: String,
    /// Record status at the time of matching.
    pub status: ApprovalStatus,
}

/// One computed attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceRow {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Final (post-backfill) slot values.
    pub slots: SlotValues<Option<ClockTime>>,
    /// Late arrival plus early departure minutes.
    pub late_minutes: u32,
    /// Day credit, two decimal places.
    pub day_credit: Decimal,
    /// Formula branch that produced `day_credit`.
    pub credit_rule: CreditRule,
    /// Ordered remarks.
    pub remarks: Vec<String>,
    /// Origin of each slot value.
    pub provenance: SlotValues<Provenance>,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Names of the holidays falling on the date.
    pub holiday_names: Vec<String>,
    /// Display label for the holidays, if any.
    pub holiday_label: Option<String>,
    /// Exception records that matched the date.
    pub matched_records: Vec<MatchedRecord>,
}

impl DailyAttendanceRow {
    /// The remarks joined for single-line display.
    pub fn remarks_text(&self) -> String {
        self.remarks.join("; ")
    }

    /// Whether any holiday falls on the row's date.
    pub fn is_holiday(&self) -> bool {
        !self.holiday_names.is_empty()
    }
}

/// Approved record counts per kind over a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    /// Out-of-office authorizations.
    pub out_of_office: u32,
    /// Leave applications.
    pub leave: u32,
    /// Travel orders.
    pub travel: u32,
    /// Compensatory days off.
    pub comp_day_off: u32,
    /// Fix-log corrections.
    pub fix_log: u32,
}

impl RecordCounts {
    /// Increments the counter for `kind`; holidays are not counted.
    pub fn add(&mut self, kind: ExceptionKind) {
        match kind {
            ExceptionKind::OutOfOffice => self.out_of_office += 1,
            ExceptionKind::Leave => self.leave += 1,
            ExceptionKind::Travel => self.travel += 1,
            ExceptionKind::CompDayOff => self.comp_day_off += 1,
            ExceptionKind::FixLog => self.fix_log += 1,
            ExceptionKind::Holiday => {}
        }
    }
}

/// Totals over every row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Sum of late minutes.
    pub late_minutes: u32,
    /// Sum of day credits.
    pub day_credit: Decimal,
    /// Late minutes expressed as days, two decimal places.
    pub late_equivalent_days: Decimal,
    /// Day credit less late-equivalent days, never negative, four decimal places.
    pub net_days: Decimal,
    /// Distinct approved records touching the range.
    pub records: RecordCounts,
}

/// The computed attendance of one employee over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Whose attendance this is.
    pub employee: EmployeeKeys,
    /// Name of the schedule used.
    pub shift_name: String,
    /// First date of the range.
    pub date_from: NaiveDate,
    /// Last date of the range.
    pub date_to: NaiveDate,
    /// One row per date, ascending, without gaps.
    pub rows: Vec<DailyAttendanceRow>,
    /// Range totals.
    pub totals: AttendanceTotals,
}

/// Result of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// The employee has a schedule; rows were computed.
    Scheduled(AttendanceReport),
    /// The employee has no shift assignment; nothing to compute.
    Unscheduled {
        /// The employee in question.
        employee: EmployeeKeys,
    },
}

impl ReconcileOutcome {
    /// The report, when the employee is scheduled.
    pub fn report(&self) -> Option<&AttendanceReport> {
        match self {
            ReconcileOutcome::Scheduled(report) => Some(report),
            ReconcileOutcome::Unscheduled { .. } => None,
        }
    }
}
