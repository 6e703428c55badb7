//! Calculation logic for the DTR reconciliation engine.
//!
//! This module contains the pure functions that turn punches, a shift
//! schedule and exception records into attendance rows: timestamp parsing,
//! bounded date ranges, punch-to-slot extraction, exception matching,
//! backfill with provenance, lateness, day credit, remarks, range totals and
//! the per-day pipeline that ties them together.

mod backfill;
mod date_range;
mod day_credit;
mod exception_resolver;
mod lateness;
mod reconcile;
mod remarks;
mod time_utils;
mod totals;
mod window_extractor;

pub use backfill::{BackfillOutcome, backfill, out_of_office_interval};
pub use date_range::{DateRange, DateRangeIter};
pub use day_credit::{CreditOutcome, DayContext, compute_base_credit, compute_day_credit};
pub use exception_resolver::{
    DayExceptions, FixLogMatch, WORK_SUSPENSION_LABEL, covers_date, find_fix_log, find_matches,
    holiday_label, resolve_day,
};
pub use lateness::{compute_lateness, slot_lateness};
pub use reconcile::{ReconcileInput, reconcile, reconcile_day};
pub use remarks::{
    ABSENT, FILE_A_LOCATOR, FIX_ON_PROCESS, LOGS_FIXED, RemarkContext, WEEKEND, compose_remarks,
    record_remark,
};
pub use time_utils::{
    is_weekend, minutes_after, parse_calendar_date, parse_clock_time, parse_timestamp,
    same_month_day,
};
pub use totals::{compute_totals, count_records};
pub use window_extractor::{bucket_punches, extract_day, extract_slot};
