//! Exception records: the approved (or pending) documents that excuse or
//! correct a day's attendance.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock_time::ClockTime;
use super::punch::EmployeeKeys;
use super::slot::SlotValues;

/// Workflow state of an exception record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Filed but not yet decided.
    ForApproval,
    /// Approved; the only state that affects computation.
    Approved,
    /// Sent back to the filer.
    Returned,
    /// Withdrawn or rejected.
    Cancelled,
}

impl ApprovalStatus {
    /// Parses an upstream status label leniently.
    ///
    /// Unknown or blank labels are treated as pending, so they never take
    /// effect.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "approved" | "approve" => ApprovalStatus::Approved,
            "returned" | "return" => ApprovalStatus::Returned,
            "cancelled" | "canceled" | "cancel" | "rejected" | "disapproved" => {
                ApprovalStatus::Cancelled
            }
            _ => ApprovalStatus::ForApproval,
        }
    }
}

/// The kinds of exception record the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// Out-of-office authorization (locator).
    OutOfOffice,
    /// Leave application.
    Leave,
    /// Travel order.
    Travel,
    /// Compensatory day off.
    CompDayOff,
    /// Manual punch correction.
    FixLog,
    /// Holiday or work suspension.
    Holiday,
}

impl ExceptionKind {
    /// Every kind, in the order records are fetched.
    pub const ALL: [ExceptionKind; 6] = [
        ExceptionKind::OutOfOffice,
        ExceptionKind::Leave,
        ExceptionKind::Travel,
        ExceptionKind::CompDayOff,
        ExceptionKind::FixLog,
        ExceptionKind::Holiday,
    ];

    /// The label used when the kind appears in a remark.
    pub fn remark_label(self) -> &'static str {
        match self {
            ExceptionKind::OutOfOffice => "Locator",
            ExceptionKind::Leave => "Leave",
            ExceptionKind::Travel => "Travel",
            ExceptionKind::CompDayOff => "CDO",
            ExceptionKind::FixLog => "Fix Log",
            ExceptionKind::Holiday => "Holiday",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExceptionKind::OutOfOffice => "OutOfOffice",
            ExceptionKind::Leave => "Leave",
            ExceptionKind::Travel => "Travel",
            ExceptionKind::CompDayOff => "CompDayOff",
            ExceptionKind::FixLog => "FixLog",
            ExceptionKind::Holiday => "Holiday",
        })
    }
}

/// One employee a record applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Internal employee object id.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Time-clock user id.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl OwnerRef {
    /// Whether this owner is the employee identified by `keys`.
    ///
    /// Either identifier matching is enough.
    pub fn matches(&self, keys: &EmployeeKeys) -> bool {
        fn same(a: &Option<String>, b: &Option<String>) -> bool {
            matches!((a, b), (Some(a), Some(b)) if !a.trim().is_empty() && a.trim() == b.trim())
        }
        same(&self.object_id, &keys.object_id) || same(&self.user_id, &keys.user_id)
    }
}

/// Kind-specific payload of an exception record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExceptionDetail {
    /// Out-of-office authorization covering a clock-time interval.
    OutOfOffice {
        /// Where the employee went.
        destination: Option<String>,
        /// Why.
        purpose: Option<String>,
        /// Departure time.
        departure: Option<ClockTime>,
        /// Expected arrival time.
        arrival: Option<ClockTime>,
    },
    /// Leave application.
    Leave {
        /// Leave type name, e.g. "Vacation Leave".
        leave_type: Option<String>,
    },
    /// Travel order.
    Travel {
        /// Travel destination.
        destination: Option<String>,
        /// Travel purpose.
        purpose: Option<String>,
    },
    /// Compensatory day off.
    CompDayOff,
    /// Manual correction of punch times.
    FixLog {
        /// Replacement time per slot; `None` leaves the slot alone.
        corrections: SlotValues<Option<ClockTime>>,
        /// Stated reason for the correction.
        reason: Option<String>,
    },
    /// Holiday or work suspension.
    Holiday {
        /// Holiday name.
        name: String,
        /// Recurring holidays match on month and day in every year.
        recurring: bool,
    },
}

/// A dated, owned, approvable exception document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRecord {
    /// Human-facing reference number.
    pub reference: String,
    /// Employees the record applies to; empty for holidays.
    #[serde(default)]
    pub owners: Vec<OwnerRef>,
    /// Calendar dates the record covers.
    pub dates: Vec<NaiveDate>,
    /// Approval state.
    pub status: ApprovalStatus,
    /// Kind-specific payload.
    pub detail: ExceptionDetail,
}

impl ExceptionRecord {
    /// The record's kind.
    pub fn kind(&self) -> ExceptionKind {
        match self.detail {
            ExceptionDetail::OutOfOffice { .. } => ExceptionKind::OutOfOffice,
            ExceptionDetail::Leave { .. } => ExceptionKind::Leave,
            ExceptionDetail::Travel { .. } => ExceptionKind::Travel,
            ExceptionDetail::CompDayOff => ExceptionKind::CompDayOff,
            ExceptionDetail::FixLog { .. } => ExceptionKind::FixLog,
            ExceptionDetail::Holiday { .. } => ExceptionKind::Holiday,
        }
    }

    /// Whether the record has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// Whether the record applies to the employee identified by `keys`.
    ///
    /// Holidays apply to everyone.
    pub fn belongs_to(&self, keys: &EmployeeKeys) -> bool {
        match self.detail {
            ExceptionDetail::Holiday { .. } => true,
            _ => self.owners.iter().any(|owner| owner.matches(keys)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(object_id: Option<&str>, user_id: Option<&str>) -> EmployeeKeys {
        EmployeeKeys::new(object_id.map(String::from), user_id.map(String::from))
    }

    fn leave_for(owner: OwnerRef) -> ExceptionRecord {
        ExceptionRecord {
            reference: "LV-1".to_string(),
            owners: vec![owner],
            dates: vec![NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()],
            status: ApprovalStatus::Approved,
            detail: ExceptionDetail::Leave { leave_type: None },
        }
    }

    #[test]
    fn test_status_labels_are_lenient() {
        assert_eq!(ApprovalStatus::from_label("Approved"), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::from_label(" APPROVED "), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::from_label("For Approval"), ApprovalStatus::ForApproval);
        assert_eq!(ApprovalStatus::from_label("for_approval"), ApprovalStatus::ForApproval);
        assert_eq!(ApprovalStatus::from_label("pending"), ApprovalStatus::ForApproval);
        assert_eq!(ApprovalStatus::from_label("Returned"), ApprovalStatus::Returned);
        assert_eq!(ApprovalStatus::from_label("Canceled"), ApprovalStatus::Cancelled);
        assert_eq!(ApprovalStatus::from_label(""), ApprovalStatus::ForApproval);
        assert_eq!(ApprovalStatus::from_label("???"), ApprovalStatus::ForApproval);
    }

    #[test]
    fn test_kind_display_and_remark_labels() {
        assert_eq!(ExceptionKind::OutOfOffice.to_string(), "OutOfOffice");
        assert_eq!(ExceptionKind::OutOfOffice.remark_label(), "Locator");
        assert_eq!(ExceptionKind::CompDayOff.remark_label(), "CDO");
        assert_eq!(ExceptionKind::Travel.remark_label(), "Travel");
    }

    #[test]
    fn test_owner_matches_on_either_identifier() {
        let record = leave_for(OwnerRef {
            object_id: Some("emp-9".to_string()),
            user_id: None,
        });
        assert!(record.belongs_to(&keys(Some("emp-9"), Some("42"))));
        assert!(!record.belongs_to(&keys(Some("emp-1"), Some("42"))));

        let record = leave_for(OwnerRef {
            object_id: None,
            user_id: Some("42".to_string()),
        });
        assert!(record.belongs_to(&keys(None, Some("42"))));
        assert!(record.belongs_to(&keys(None, Some(" 42 "))));
        assert!(!record.belongs_to(&keys(None, Some("  "))));
        assert!(!record.belongs_to(&keys(None, None)));
    }

    #[test]
    fn test_holidays_belong_to_everyone() {
        let holiday = ExceptionRecord {
            reference: "H-1".to_string(),
            owners: vec![],
            dates: vec![NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()],
            status: ApprovalStatus::Approved,
            detail: ExceptionDetail::Holiday {
                name: "Christmas Day".to_string(),
                recurring: true,
            },
        };
        assert!(holiday.belongs_to(&EmployeeKeys::default()));
        assert_eq!(holiday.kind(), ExceptionKind::Holiday);
    }
}
