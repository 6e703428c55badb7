//! Late arrival and early departure minutes.

use crate::config::LatenessConfig;
use crate::models::{ClockTime, Provenance, ShiftWindow, Slot, SlotValues};

use super::time_utils::minutes_after;

/// Minutes one slot contributes to lateness.
///
/// Arrival slots count minutes after the nominal time; departure slots count
/// minutes before it.
pub fn slot_lateness(slot: Slot, actual: ClockTime, nominal: ClockTime) -> u32 {
    if slot.is_check_in() {
        minutes_after(actual, nominal)
    } else {
        minutes_after(nominal, actual)
    }
}

/// Total late-in and early-out minutes for a day.
///
/// # Arguments
///
/// * `slots` - Final (post-backfill) slot values
/// * `provenance` - Origin of each slot value
/// * `shift` - The employee's schedule
/// * `config` - Whether backfilled values are exempt
///
/// # Returns
///
/// The sum over active slots that have both a value and a nominal time.
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::compute_lateness;
/// use dtr_engine::config::LatenessConfig;
/// use dtr_engine::models::{ShiftAssignment, ShiftMode, ShiftWindow, SlotValues};
///
/// let shift = ShiftWindow::from_assignments(&[ShiftAssignment {
///     name: "Regular".to_string(),
///     mode: ShiftMode::Ampm,
///     check_in: "08:00".parse().ok(),
///     check_in_window: None,
///     check_out: "17:00".parse().ok(),
///     check_out_window: None,
///     credit: None,
/// }])
/// .unwrap();
///
/// let slots = SlotValues {
///     am_in: "08:10".parse().ok(),
///     pm_out: "16:45".parse().ok(),
///     ..SlotValues::default()
/// };
/// let late = compute_lateness(&slots, &SlotValues::default(), &shift, &LatenessConfig::default());
/// assert_eq!(late, 25);
/// ```
pub fn compute_lateness(
    slots: &SlotValues<Option<ClockTime>>,
    provenance: &SlotValues<Provenance>,
    shift: &ShiftWindow,
    config: &LatenessConfig,
) -> u32 {
    Slot::ALL
        .into_iter()
        .filter(|slot| !(config.exempt_backfilled && *provenance.get(*slot) != Provenance::None))
        .filter_map(|slot| {
            let actual = (*slots.get(slot))?;
            let nominal = shift.nominal(slot)?;
            Some(slot_lateness(slot, actual, nominal))
        })
        .sum()
}
