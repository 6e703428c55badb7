//! Tolerant field lookup over upstream JSON objects.
//!
//! Upstream stores name the same field several ways (`LOCDATE`, `locatordate`,
//! `leaveDate`). Every helper here takes the list of accepted names and reads
//! the first one that holds a usable value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::calculation::{parse_calendar_date, parse_clock_time};
use crate::models::{ClockTime, OwnerRef};

/// Object-id field names shared by every record kind.
pub const OBJECT_ID_FIELDS: &[&str] = &["emp_objid", "EMP_OBJID", "objid", "OBJID"];

/// User-id field names shared by every record kind.
pub const USER_ID_FIELDS: &[&str] = &["USERID", "userid", "user_id", "userId", "LOCUSERID"];

/// Returns the field called `name`.
///
/// An exact match wins; otherwise the first key equal to `name` ignoring
/// ASCII case is used, so `isrecurring` answers for `isRecurring`.
pub fn field<'v>(value: &'v Value, name: &str) -> Option<&'v Value> {
    value.get(name).or_else(|| {
        value
            .as_object()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, field)| field)
    })
}

/// Returns the first field among `names` that is present and not null.
pub fn lookup<'v>(value: &'v Value, names: &[&str]) -> Option<&'v Value> {
    names
        .iter()
        .filter_map(|name| field(value, name))
        .find(|field| !field.is_null())
}

/// Reads a field as trimmed, non-empty text. Numbers are rendered as text.
pub fn text(value: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| field(value, name))
        .find_map(scalar_text)
}

/// Renders a string or number field as trimmed, non-empty text.
pub fn scalar_text(field: &Value) -> Option<String> {
    match field {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a boolean-ish field: `true`, `1`, `"1"`, `"true"`, `"yes"`, `"y"`.
pub fn flag(value: &Value, names: &[&str]) -> bool {
    match lookup(value, names) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Reads a decimal field stored as a number or numeric string.
pub fn decimal(value: &Value, names: &[&str]) -> Option<Decimal> {
    text(value, names).and_then(|raw| raw.parse().ok())
}

/// Reads a clock-time field.
///
/// Accepts bare times (`08:00`, `8:00:00`), twelve-hour times (`8:00 AM`)
/// and full timestamps. `-` and blank values read as no time.
pub fn clock(value: &Value, names: &[&str]) -> Option<ClockTime> {
    let raw = text(value, names)?;
    if raw == "-" {
        return None;
    }
    parse_meridiem(&raw).or_else(|| parse_clock_time(&raw))
}

fn parse_meridiem(raw: &str) -> Option<ClockTime> {
    let upper = raw.to_ascii_uppercase();
    let (body, afternoon) = if let Some(body) = upper.strip_suffix("PM") {
        (body, true)
    } else if let Some(body) = upper.strip_suffix("AM") {
        (body, false)
    } else {
        return None;
    };
    let time = ClockTime::parse_hm(body.trim())?;
    let hour = match (time.hour(), afternoon) {
        (0, _) | (13.., _) => return None,
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    ClockTime::from_hm(hour, time.minute())
}

/// Reads a single calendar date from the first field that parses.
pub fn date(value: &Value, names: &[&str]) -> Option<NaiveDate> {
    names
        .iter()
        .filter_map(|name| field(value, name))
        .filter_map(scalar_text)
        .find_map(|raw| parse_calendar_date(&raw))
}

/// Collects the dates held by the first field among `names` that yields any.
///
/// A field may be a single date string, a comma- or semicolon-separated
/// list, a JSON array (of strings or of objects carrying a `date`-like
/// field), or a string holding such an array. Unreadable entries are
/// skipped. The result is sorted and free of duplicates.
pub fn dates(value: &Value, names: &[&str]) -> Vec<NaiveDate> {
    for name in names {
        let Some(raw) = field(value, name) else {
            continue;
        };
        let mut found = Vec::new();
        collect_dates(raw, &mut found);
        if !found.is_empty() {
            found.sort();
            found.dedup();
            return found;
        }
    }
    Vec::new()
}

const NESTED_DATE_FIELDS: &[&str] = &[
    "date",
    "travel_date",
    "traveldate",
    "leavedate",
    "deducteddate",
    "cdodate",
];

fn collect_dates(field: &Value, out: &mut Vec<NaiveDate>) {
    match field {
        Value::Array(items) => {
            for item in items {
                collect_dates(item, out);
            }
        }
        Value::Object(_) => {
            if let Some(date) = date(field, NESTED_DATE_FIELDS) {
                out.push(date);
            }
        }
        Value::String(raw) => {
            let raw = raw.trim();
            if raw.starts_with('[') {
                if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
                    collect_dates(&parsed, out);
                }
                return;
            }
            out.extend(
                raw.split([',', ';'])
                    .filter_map(|piece| parse_calendar_date(piece.trim())),
            );
        }
        _ => {}
    }
}

/// Reads the owner identifiers of a record.
pub fn owner(value: &Value) -> OwnerRef {
    OwnerRef {
        object_id: text(value, OBJECT_ID_FIELDS),
        user_id: text(value, USER_ID_FIELDS),
    }
}
