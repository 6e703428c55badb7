//! Exception rows from the approval stores: locators, leave, travel orders,
//! CDOs, fix logs and holidays.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::models::{
    ApprovalStatus, ExceptionDetail, ExceptionKind, ExceptionRecord, OwnerRef, SlotValues,
};

use super::fields::{self, clock, dates, flag, text};

/// Reads one row of the given kind.
///
/// Rows that cover no readable date are rejected. A row without a reference
/// number gets one built from its kind and first date.
pub fn record_from_value(kind: ExceptionKind, value: &Value) -> Option<ExceptionRecord> {
    let record = match kind {
        ExceptionKind::OutOfOffice => out_of_office(value),
        ExceptionKind::Leave => leave(value),
        ExceptionKind::Travel => travel(value),
        ExceptionKind::CompDayOff => comp_day_off(value),
        ExceptionKind::FixLog => fix_log(value),
        ExceptionKind::Holiday => holiday(value),
    };
    if record.is_none() {
        debug!(%kind, row = %value, "dropping exception row without a readable date");
    }
    record
}

/// Reads every row of the given kind, dropping unreadable ones.
pub fn records_from_values(kind: ExceptionKind, values: &[Value]) -> Vec<ExceptionRecord> {
    values
        .iter()
        .filter_map(|value| record_from_value(kind, value))
        .collect()
}

fn status(value: &Value, names: &[&str]) -> ApprovalStatus {
    text(value, names)
        .map(|label| ApprovalStatus::from_label(&label))
        .unwrap_or(ApprovalStatus::ForApproval)
}

fn reference(value: &Value, names: &[&str], kind: ExceptionKind, dates: &[NaiveDate]) -> String {
    text(value, names).unwrap_or_else(|| match dates.first() {
        Some(first) => format!("{}-{}", kind, first),
        None => kind.to_string(),
    })
}

fn owners(value: &Value) -> Vec<OwnerRef> {
    let owner = fields::owner(value);
    if owner.object_id.is_none() && owner.user_id.is_none() {
        Vec::new()
    } else {
        vec![owner]
    }
}

fn out_of_office(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(value, &["locatordate", "LOCDATE", "locdate", "date"]);
    if dates.is_empty() {
        return None;
    }
    Some(ExceptionRecord {
        reference: reference(value, &["LOCNO", "locno"], ExceptionKind::OutOfOffice, &dates),
        owners: owners(value),
        status: status(value, &["locstatus", "LOCSTATUS", "status"]),
        detail: ExceptionDetail::OutOfOffice {
            destination: text(value, &["LOCDESTINATION", "locdestination"]),
            purpose: text(value, &["LOCPURPOSE", "locpurpose"]),
            departure: clock(
                value,
                &["loctimedeparture", "locdeparture", "LOCTIMEDEPARTURE"],
            ),
            arrival: clock(value, &["loctimearrival", "locarrival", "LOCTIMEARRIVAL"]),
        },
        dates,
    })
}

fn leave(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(
        value,
        &["LEAVEDATE", "leavedate", "leaveDate", "details", "leave_dates"],
    );
    if dates.is_empty() {
        return None;
    }
    Some(ExceptionRecord {
        reference: reference(
            value,
            &["leaveno", "LEAVENO", "LEAVEREFNO", "leaverefno"],
            ExceptionKind::Leave,
            &dates,
        ),
        owners: owners(value),
        status: status(value, &["leavestatus", "LEAVESTATUS", "status"]),
        detail: ExceptionDetail::Leave {
            leave_type: text(value, &["leave_type_name", "LeaveName", "leavetype"]),
        },
        dates,
    })
}

const TRAVEL_DATE_FIELDS: &[&str] = &[
    "travel_dates",
    "travelDates",
    "travel_dates_array",
    "travel_dates_list",
    "travel_dates_json",
    "travelDatesJson",
    "travel_dates_data",
    "travel_dates_raw",
    "traveldate",
    "TRAVELDATE",
    "travel_date",
    "date",
];

const PARTICIPANT_FIELDS: &[&str] = &[
    "employees",
    "participants",
    "employees_data",
    "participantUserIds",
];

fn travel(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(value, TRAVEL_DATE_FIELDS);
    if dates.is_empty() {
        return None;
    }

    let mut owners = owners(value);
    for name in PARTICIPANT_FIELDS {
        if let Some(field) = fields::field(value, name) {
            collect_participants(field, &mut owners);
        }
    }

    Some(ExceptionRecord {
        reference: reference(
            value,
            &[
                "travel_no",
                "travelno",
                "TRAVELNO",
                "reference_no",
                "reference",
                "TRAVELUID",
            ],
            ExceptionKind::Travel,
            &dates,
        ),
        owners,
        status: status(
            value,
            &["status", "travelstatus", "TRAVELSTATUS", "STATUS", "approval_status"],
        ),
        detail: ExceptionDetail::Travel {
            destination: text(value, &["destination", "DESTINATION", "travel_destination"]),
            purpose: text(value, &["purpose", "PURPOSE", "travel_purpose"]),
        },
        dates,
    })
}

fn collect_participants(field: &Value, out: &mut Vec<OwnerRef>) {
    match field {
        Value::Array(items) => {
            for item in items {
                collect_participants(item, out);
            }
        }
        Value::Object(_) => {
            let owner = fields::owner(field);
            if owner.object_id.is_some() || owner.user_id.is_some() {
                out.push(owner);
            }
        }
        Value::String(raw) if raw.trim_start().starts_with('[') => {
            if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
                collect_participants(&parsed, out);
            }
        }
        Value::String(_) | Value::Number(_) => {
            if let Some(user_id) = fields::scalar_text(field) {
                out.push(OwnerRef {
                    object_id: None,
                    user_id: Some(user_id),
                });
            }
        }
        _ => {}
    }
}

fn comp_day_off(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(value, &["cdodate", "CDODATE", "date", "dates"]);
    if dates.is_empty() {
        return None;
    }
    Some(ExceptionRecord {
        reference: reference(
            value,
            &["cdono", "CDONO", "displayRef", "cdo_id"],
            ExceptionKind::CompDayOff,
            &dates,
        ),
        owners: owners(value),
        status: status(value, &["cdodatestatus", "cdostatus", "CDOSTATUS", "status"]),
        detail: ExceptionDetail::CompDayOff,
        dates,
    })
}

fn fix_log(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(value, &["checktimedate", "CHECKTIMEDATE", "date"]);
    if dates.is_empty() {
        return None;
    }
    let corrections = SlotValues {
        am_in: clock(value, &["am_checkin", "AM_CHECKIN"]),
        am_out: clock(value, &["am_checkout", "AM_CHECKOUT"]),
        pm_in: clock(value, &["pm_checkin", "PM_CHECKIN"]),
        pm_out: clock(value, &["pm_checkout", "PM_CHECKOUT"]),
    };
    Some(ExceptionRecord {
        reference: reference(value, &["fixid", "FIXID"], ExceptionKind::FixLog, &dates),
        owners: owners(value),
        status: status(value, &["fixstatus", "FIXSTATUS", "status"]),
        detail: ExceptionDetail::FixLog {
            corrections,
            reason: text(value, &["remarks", "reason", "REMARKS"]),
        },
        dates,
    })
}

fn holiday(value: &Value) -> Option<ExceptionRecord> {
    let dates = dates(
        value,
        &[
            "HOLIDAYDATE",
            "holidaydate",
            "holiday_date",
            "HolidayDate",
            "date",
        ],
    );
    if dates.is_empty() {
        return None;
    }
    let name = text(
        value,
        &[
            "HOLIDAYNAME",
            "holidayname",
            "holiday_name",
            "HolidayName",
            "description",
            "name",
            "HOLIDAYDESC",
            "holidaydesc",
        ],
    )
    .unwrap_or_else(|| "Holiday".to_string());

    Some(ExceptionRecord {
        reference: text(value, &["HOLIDAYID", "holidayid", "id"])
            .unwrap_or_else(|| format!("{} ({})", name, dates[0])),
        owners: Vec::new(),
        status: holiday_status(value),
        detail: ExceptionDetail::Holiday {
            name,
            recurring: flag(
                value,
                &[
                    "isrecurring",
                    "ISRECURRING",
                    "isRecurring",
                    "is_recurring",
                    "recurring",
                ],
            ),
        },
        dates,
    })
}

/// Holiday rows carry an active flag rather than an approval workflow. A row
/// without one is in force; a row whose flag is anything but active is not.
fn holiday_status(value: &Value) -> ApprovalStatus {
    let Some(field) = fields::lookup(value, &["status", "holidaystatus", "active"]) else {
        return ApprovalStatus::Approved;
    };
    let active = match field {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "1" | "true" | "active" | "approved"
        ),
        _ => false,
    };
    if active {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Cancelled
    }
}
