//! Matching exception records to an employee and a date.
//!
//! Only approved records affect computation. The one exception is the fix
//! log, where a pending correction is surfaced so a remark can say the fix
//! is in progress.

use chrono::NaiveDate;

use crate::models::{
    ApprovalStatus, EmployeeKeys, ExceptionDetail, ExceptionKind, ExceptionRecord, MatchedRecord,
};

use super::time_utils::same_month_day;

/// Label used when any holiday on a date is a work suspension.
pub const WORK_SUSPENSION_LABEL: &str = "Work Suspension";

/// Whether `record` covers `date`.
///
/// Recurring holidays match on month and day in any year; everything else
/// matches on the exact date.
pub fn covers_date(record: &ExceptionRecord, date: NaiveDate) -> bool {
    match record.detail {
        ExceptionDetail::Holiday {
            recurring: true, ..
        } => record.dates.iter().any(|d| same_month_day(*d, date)),
        _ => record.dates.contains(&date),
    }
}

/// Finds the approved records of `kind` that belong to the employee and
/// cover `date`.
///
/// # Arguments
///
/// * `records` - Candidate records of any kind
/// * `kind` - The kind to look for
/// * `date` - The date being computed
/// * `keys` - The employee's identifiers
///
/// # Returns
///
/// The matching records in input order. Pending, returned and cancelled
/// records never match.
pub fn find_matches<'a>(
    records: &'a [ExceptionRecord],
    kind: ExceptionKind,
    date: NaiveDate,
    keys: &EmployeeKeys,
) -> Vec<&'a ExceptionRecord> {
    records
        .iter()
        .filter(|r| r.kind() == kind && r.is_approved())
        .filter(|r| r.belongs_to(keys) && covers_date(r, date))
        .collect()
}

/// A fix log found for a date, approved or still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixLogMatch<'a> {
    /// The record.
    pub record: &'a ExceptionRecord,
    /// Its status: `Approved` or `ForApproval`.
    pub status: ApprovalStatus,
}

impl FixLogMatch<'_> {
    /// Whether the correction may be applied.
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }
}

/// Finds the fix log for the employee on `date`, preferring an approved one.
pub fn find_fix_log<'a>(
    records: &'a [ExceptionRecord],
    date: NaiveDate,
    keys: &EmployeeKeys,
) -> Option<FixLogMatch<'a>> {
    let candidates = || {
        records
            .iter()
            .filter(|r| r.kind() == ExceptionKind::FixLog)
            .filter(|r| r.belongs_to(keys) && covers_date(r, date))
    };
    candidates()
        .find(|r| r.status == ApprovalStatus::Approved)
        .or_else(|| candidates().find(|r| r.status == ApprovalStatus::ForApproval))
        .map(|record| FixLogMatch {
            record,
            status: record.status,
        })
}

/// Builds the display label for the holidays on a date.
///
/// Any name containing "work suspension" (any case) collapses the label to
/// exactly [`WORK_SUSPENSION_LABEL`]; otherwise the names are joined with
/// `", "`.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::holiday_label;
///
/// let names = vec!["Rizal Day".to_string(), "Foundation Day".to_string()];
/// assert_eq!(holiday_label(&names).as_deref(), Some("Rizal Day, Foundation Day"));
///
/// let names = vec!["Typhoon - WORK SUSPENSION".to_string()];
/// assert_eq!(holiday_label(&names).as_deref(), Some("Work Suspension"));
/// assert_eq!(holiday_label(&[]), None);
/// ```
pub fn holiday_label(names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    if names
        .iter()
        .any(|name| name.to_lowercase().contains("work suspension"))
    {
        return Some(WORK_SUSPENSION_LABEL.to_string());
    }
    Some(names.join(", "))
}

/// Everything matched for one employee on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayExceptions<'a> {
    /// Approved out-of-office authorizations.
    pub out_of_office: Vec<&'a ExceptionRecord>,
    /// Approved leave.
    pub leave: Vec<&'a ExceptionRecord>,
    /// Approved travel.
    pub travel: Vec<&'a ExceptionRecord>,
    /// Approved compensatory days off.
    pub comp_day_off: Vec<&'a ExceptionRecord>,
    /// Fix log, approved or pending.
    pub fix_log: Option<FixLogMatch<'a>>,
    /// Approved holidays.
    pub holidays: Vec<&'a ExceptionRecord>,
}

impl<'a> DayExceptions<'a> {
    /// The fix log, but only when approved.
    pub fn approved_fix_log(&self) -> Option<&'a ExceptionRecord> {
        self.fix_log.filter(|m| m.is_approved()).map(|m| m.record)
    }

    /// Names of the holidays on the date.
    pub fn holiday_names(&self) -> Vec<String> {
        self.holidays
            .iter()
            .filter_map(|r| match &r.detail {
                ExceptionDetail::Holiday { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether any holiday falls on the date.
    pub fn has_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }

    /// The kind that grants a full-day override, by precedence:
    /// travel, compensatory day off, approved fix log, out-of-office.
    pub fn override_kind(&self) -> Option<ExceptionKind> {
        if !self.travel.is_empty() {
            Some(ExceptionKind::Travel)
        } else if !self.comp_day_off.is_empty() {
            Some(ExceptionKind::CompDayOff)
        } else if self.approved_fix_log().is_some() {
            Some(ExceptionKind::FixLog)
        } else if !self.out_of_office.is_empty() {
            Some(ExceptionKind::OutOfOffice)
        } else {
            None
        }
    }

    /// Whether anything at all matched.
    pub fn is_empty(&self) -> bool {
        self.out_of_office.is_empty()
            && self.leave.is_empty()
            && self.travel.is_empty()
            && self.comp_day_off.is_empty()
            && self.fix_log.is_none()
            && self.holidays.is_empty()
    }

    /// The matched records in display order, for the row's audit list.
    pub fn matched_records(&self) -> Vec<MatchedRecord> {
        let approved = self
            .out_of_office
            .iter()
            .chain(&self.leave)
            .chain(&self.travel)
            .chain(&self.comp_day_off);
        let fix_log = self.fix_log.iter().map(|m| &m.record);
        approved
            .chain(fix_log)
            .chain(&self.holidays)
            .map(|r| MatchedRecord {
                kind: r.kind(),
                reference: r.reference.clone(),
                status: r.status,
            })
            .collect()
    }
}

/// Resolves every exception kind for one employee on one date.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::resolve_day;
/// use dtr_engine::models::{
///     ApprovalStatus, EmployeeKeys, ExceptionDetail, ExceptionKind, ExceptionRecord, OwnerRef,
/// };
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let keys = EmployeeKeys::new(None, Some("42".to_string()));
/// let travel = ExceptionRecord {
///     reference: "TO-7".to_string(),
///     owners: vec![OwnerRef { object_id: None, user_id: Some("42".to_string()) }],
///     dates: vec![date],
///     status: ApprovalStatus::Approved,
///     detail: ExceptionDetail::Travel { destination: None, purpose: None },
/// };
///
/// let records = [travel];
/// let day = resolve_day(&records, date, &keys);
/// assert_eq!(day.override_kind(), Some(ExceptionKind::Travel));
/// ```
pub fn resolve_day<'a>(
    records: &'a [ExceptionRecord],
    date: NaiveDate,
    keys: &EmployeeKeys,
) -> DayExceptions<'a> {
    DayExceptions {
        out_of_office: find_matches(records, ExceptionKind::OutOfOffice, date, keys),
        leave: find_matches(records, ExceptionKind::Leave, date, keys),
        travel: find_matches(records, ExceptionKind::Travel, date, keys),
        comp_day_off: find_matches(records, ExceptionKind::CompDayOff, date, keys),
        fix_log: find_fix_log(records, date, keys),
        holidays: find_matches(records, ExceptionKind::Holiday, date, keys),
    }
}
