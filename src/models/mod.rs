//! Core data models for the DTR reconciliation engine.
//!
//! This module contains the inputs (punches, shift schedules, exception
//! records) and outputs (attendance rows, totals, reports) of the engine.

mod attendance;
mod clock_time;
mod exception;
mod punch;
mod shift;
mod slot;

pub use attendance::{
    AttendanceReport, AttendanceTotals, CreditRule, DailyAttendanceRow, MatchedRecord, Provenance,
    ReconcileOutcome, RecordCounts,
};
pub use clock_time::{ClockTime, MINUTES_PER_DAY, ParseClockTimeError, TimeWindow};
pub use exception::{ApprovalStatus, ExceptionDetail, ExceptionKind, ExceptionRecord, OwnerRef};
pub use punch::{EmployeeKeys, PunchEvent};
pub use shift::{CreditWeights, ShiftAssignment, ShiftMode, ShiftWindow, SlotSchedule};
pub use slot::{Slot, SlotValues};
