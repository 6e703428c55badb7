//! Punch-to-slot assignment.
//!
//! For each active slot the extractor looks at the punches that fall inside
//! the slot's window and picks one: the earliest for AM-in, AM-out and PM-in,
//! the latest for PM-out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{ClockTime, EmployeeKeys, PunchEvent, ShiftWindow, Slot, SlotValues, TimeWindow};

use super::date_range::DateRange;
use super::time_utils::parse_timestamp;

/// Selects the punch for one slot.
///
/// # Arguments
///
/// * `punches` - The day's punch times, in any order
/// * `slot` - The slot being filled
/// * `window` - The slot's effective window, `None` for an inactive slot
///
/// # Returns
///
/// The selected time, or `None` when the slot is inactive or no punch falls
/// inside its window.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::extract_slot;
/// use dtr_engine::models::{ClockTime, Slot, TimeWindow};
///
/// let t = |s: &str| s.parse::<ClockTime>().unwrap();
/// let punches = [t("16:58"), t("07:52"), t("17:20"), t("07:58")];
///
/// let morning = TimeWindow::new(t("07:00"), t("09:00"));
/// assert_eq!(extract_slot(&punches, Slot::AmIn, Some(morning)), Some(t("07:52")));
///
/// let evening = TimeWindow::new(t("16:00"), t("18:00"));
/// assert_eq!(extract_slot(&punches, Slot::PmOut, Some(evening)), Some(t("17:20")));
/// assert_eq!(extract_slot(&punches, Slot::PmOut, None), None);
/// ```
pub fn extract_slot(
    punches: &[ClockTime],
    slot: Slot,
    window: Option<TimeWindow>,
) -> Option<ClockTime> {
    let window = window?;
    let inside = punches.iter().copied().filter(|time| window.contains(*time));
    match slot {
        Slot::PmOut => inside.max(),
        Slot::AmIn | Slot::AmOut | Slot::PmIn => inside.min(),
    }
}

/// Selects the punch for every slot of a day.
///
/// Slots are filled independently, so a single punch may satisfy two slots
/// whose windows overlap.
pub fn extract_day(
    punches: &[ClockTime],
    shift: &ShiftWindow,
    fallbacks: &SlotValues<TimeWindow>,
) -> SlotValues<Option<ClockTime>> {
    SlotValues::from_fn(|slot| extract_slot(punches, slot, shift.effective_window(slot, fallbacks)))
}

/// Groups punch times by calendar date, keeping only dates inside `range`.
///
/// Punches whose timestamp cannot be read, or that were recorded under a key
/// belonging to someone else, are dropped.
pub fn bucket_punches(
    events: &[PunchEvent],
    keys: &EmployeeKeys,
    range: &DateRange,
) -> BTreeMap<NaiveDate, Vec<ClockTime>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<ClockTime>> = BTreeMap::new();
    for event in events {
        if !keys.is_key(&event.employee_key) {
            debug!(
                employee_key = %event.employee_key,
                "dropping punch recorded under another employee"
            );
            continue;
        }
        let Some((date, time)) = parse_timestamp(&event.timestamp) else {
            debug!(timestamp = %event.timestamp, "dropping punch with unreadable timestamp");
            continue;
        };
        if range.contains(date) {
            buckets.entry(date).or_default().push(time);
        }
    }
    buckets
}
