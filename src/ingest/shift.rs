//! Shift assignment rows from the schedule store.

use serde_json::Value;
use tracing::debug;

use crate::models::{ShiftAssignment, ShiftMode, ShiftWindow, TimeWindow};

use super::fields::{clock, decimal, text};

/// Reads one assignment row.
///
/// Rows without a recognizable mode are rejected. A window is kept only
/// when both ends are present and in order; otherwise the slot falls back
/// to the configured window.
pub fn assignment_from_value(value: &Value) -> Option<ShiftAssignment> {
    let mode_label = text(value, &["shifttimemode", "SHIFTTIMEMODE", "mode"])?;
    let Some(mode) = ShiftMode::from_label(&mode_label) else {
        debug!(mode = %mode_label, "dropping shift assignment with unknown mode");
        return None;
    };

    Some(ShiftAssignment {
        name: text(value, &["shiftname", "SHIFTNAME", "name"]).unwrap_or_else(|| mode.to_string()),
        mode,
        check_in: clock(value, &["shift_checkin", "SHIFT_CHECKIN"]),
        check_in_window: window(value, "shift_checkin_start", "shift_checkin_end"),
        check_out: clock(value, &["shift_checkout", "SHIFT_CHECKOUT"]),
        check_out_window: window(value, "shift_checkout_start", "shift_checkout_end"),
        credit: decimal(value, &["credits", "CREDITS", "credit"]),
    })
}

fn window(value: &Value, start_field: &str, end_field: &str) -> Option<TimeWindow> {
    let start_upper = start_field.to_ascii_uppercase();
    let end_upper = end_field.to_ascii_uppercase();
    let start = clock(value, &[start_field, start_upper.as_str()])?;
    let end = clock(value, &[end_field, end_upper.as_str()])?;
    let window = TimeWindow::new(start, end);
    if !window.is_ordered() {
        debug!(%window, "ignoring inverted shift window");
        return None;
    }
    Some(window)
}

/// Assembles an employee's schedule from assignment rows, most recent first.
///
/// Returns `None` when no row is usable, i.e. the employee is unscheduled.
pub fn shift_from_values(values: &[Value]) -> Option<ShiftWindow> {
    let assignments: Vec<ShiftAssignment> =
        values.iter().filter_map(assignment_from_value).collect();
    ShiftWindow::from_assignments(&assignments)
}
