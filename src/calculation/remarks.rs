//! Remark composition.
//!
//! Remarks are produced in a fixed order: the weekend or absence marker,
//! one remark per matched record, the fix-log status when no record remark
//! was produced, and finally the locator hint.

use chrono::NaiveDate;

use crate::config::RemarksConfig;
use crate::models::ExceptionRecord;

use super::exception_resolver::DayExceptions;
use super::time_utils::is_weekend;

/// Remark for Saturdays and Sundays.
pub const WEEKEND: &str = "Weekend";
/// Remark for a past working day with no punches and no excuse.
pub const ABSENT: &str = "Absent";
/// Remark for a date covered by an approved fix log.
pub const LOGS_FIXED: &str = "LogsFixed";
/// Remark for a date with a fix log still awaiting approval.
pub const FIX_ON_PROCESS: &str = "FixOnProcess";
/// Hint for a past working day with some, but not all, punches captured.
pub const FILE_A_LOCATOR: &str = "File a locator";

/// What the remarks engine needs to know about one date.
#[derive(Debug, Clone, Copy)]
pub struct RemarkContext<'d, 'a> {
    /// The date of the row.
    pub date: NaiveDate,
    /// The current date; only earlier dates can be absent.
    pub today: NaiveDate,
    /// Readable punches recorded on the date.
    pub punch_count: usize,
    /// Active slots holding a final value.
    pub captured_slots: usize,
    /// Slots the shift expects.
    pub active_slots: usize,
    /// Exceptions matched on the date.
    pub day: &'d DayExceptions<'a>,
}

/// Renders the remark for a matched record, e.g. `Locator (L-2025-001)`.
pub fn record_remark(record: &ExceptionRecord) -> String {
    format!("{} ({})", record.kind().remark_label(), record.reference)
}

/// Whether the date counts as an unexcused absence.
fn is_absent(ctx: &RemarkContext<'_, '_>, config: &RemarksConfig) -> bool {
    let day = ctx.day;
    let excused = !day.leave.is_empty() || !day.travel.is_empty() || day.has_holiday();
    let excused_by_other = config.absent_suppressed_by_any_exception
        && (!day.out_of_office.is_empty()
            || !day.comp_day_off.is_empty()
            || day.approved_fix_log().is_some());
    ctx.punch_count == 0 && !excused && !excused_by_other && ctx.date < ctx.today
}

fn needs_locator(ctx: &RemarkContext<'_, '_>, config: &RemarksConfig) -> bool {
    let day = ctx.day;
    config.suggest_locator
        && ctx.date < ctx.today
        && !is_weekend(ctx.date)
        && !day.has_holiday()
        && day.out_of_office.is_empty()
        && day.leave.is_empty()
        && day.travel.is_empty()
        && ctx.captured_slots > 0
        && ctx.captured_slots < ctx.active_slots
}

/// Composes the ordered remarks for one date.
///
/// # Arguments
///
/// * `ctx` - Facts about the date
/// * `config` - Remark switches
///
/// # Returns
///
/// Remarks in display order, without duplicates. Holiday names are not
/// remarks; they are reported separately on the row.
pub fn compose_remarks(ctx: &RemarkContext<'_, '_>, config: &RemarksConfig) -> Vec<String> {
    let mut remarks: Vec<String> = Vec::new();
    let mut push = |remark: String| {
        if !remarks.contains(&remark) {
            remarks.push(remark);
        }
    };

    if is_weekend(ctx.date) {
        push(WEEKEND.to_string());
    } else if is_absent(ctx, config) {
        push(ABSENT.to_string());
    }

    let day = ctx.day;
    let records = day
        .out_of_office
        .iter()
        .chain(&day.leave)
        .chain(&day.travel)
        .chain(&day.comp_day_off);
    let mut produced_record_remark = false;
    for record in records {
        push(record_remark(record));
        produced_record_remark = true;
    }

    if !produced_record_remark {
        if let Some(fix) = day.fix_log {
            let label = if fix.is_approved() {
                LOGS_FIXED
            } else {
                FIX_ON_PROCESS
            };
            push(label.to_string());
        }
    }

    if needs_locator(ctx, config) {
        push(FILE_A_LOCATOR.to_string());
    }

    remarks
}
