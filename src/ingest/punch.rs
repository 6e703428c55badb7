//! Punch rows from the time-clock store.

use serde_json::Value;
use tracing::debug;

use crate::models::PunchEvent;

use super::fields::text;

const KEY_FIELDS: &[&str] = &["USERID", "userid", "user_id", "userId"];
const TIME_FIELDS: &[&str] = &["CHECKTIME", "checktime", "timestamp", "DATE", "date"];

/// Reads one punch row. The timestamp is kept as stored.
pub fn punch_from_value(value: &Value) -> Option<PunchEvent> {
    Some(PunchEvent {
        employee_key: text(value, KEY_FIELDS)?,
        timestamp: text(value, TIME_FIELDS)?,
    })
}

/// Reads every punch row, dropping rows without a key or a timestamp.
pub fn punches_from_values(values: &[Value]) -> Vec<PunchEvent> {
    values
        .iter()
        .filter_map(|value| {
            let punch = punch_from_value(value);
            if punch.is_none() {
                debug!(row = %value, "dropping punch row without key or timestamp");
            }
            punch
        })
        .collect()
}
