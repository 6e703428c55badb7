//! Synthesizing missing slot values from approved exceptions.
//!
//! A raw punch always wins. A missing active slot is filled with its nominal
//! time when an approved out-of-office interval covers that nominal time, and
//! otherwise with an approved fix-log correction for the slot. Every filled
//! slot is tagged with its provenance.

use tracing::debug;

use crate::models::{
    ClockTime, ExceptionDetail, ExceptionRecord, Provenance, ShiftWindow, Slot, SlotValues,
    TimeWindow,
};

/// Final slot values and where each came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillOutcome {
    /// Post-backfill slot values.
    pub slots: SlotValues<Option<ClockTime>>,
    /// Origin of each value.
    pub provenance: SlotValues<Provenance>,
}

impl BackfillOutcome {
    /// Whether any slot was synthesized rather than punched.
    pub fn is_backfilled(&self) -> bool {
        self.provenance.iter().any(|(_, p)| *p != Provenance::None)
    }
}

/// The clock-time interval an out-of-office record covers.
///
/// Departure and arrival are normalized so the interval runs from the earlier
/// to the later. With only one of the two times the interval is that single
/// minute; with neither there is no interval.
pub fn out_of_office_interval(record: &ExceptionRecord) -> Option<TimeWindow> {
    let ExceptionDetail::OutOfOffice {
        departure, arrival, ..
    } = record.detail
    else {
        return None;
    };
    match (departure, arrival) {
        (Some(departure), Some(arrival)) => Some(TimeWindow::spanning(departure, arrival)),
        (Some(only), None) | (None, Some(only)) => Some(TimeWindow::new(only, only)),
        (None, None) => None,
    }
}

/// Fills missing active slots from approved exceptions.
///
/// # Arguments
///
/// * `raw` - Slot values taken from punches
/// * `out_of_office` - Approved out-of-office records for the date
/// * `fix_log` - The approved fix log for the date, if any
/// * `shift` - The employee's schedule
///
/// # Returns
///
/// A [`BackfillOutcome`]. Inactive slots are never filled, and a fix log
/// that is not approved is ignored.
pub fn backfill(
    raw: &SlotValues<Option<ClockTime>>,
    out_of_office: &[&ExceptionRecord],
    fix_log: Option<&ExceptionRecord>,
    shift: &ShiftWindow,
) -> BackfillOutcome {
    let intervals: Vec<TimeWindow> = out_of_office
        .iter()
        .filter(|r| r.is_approved())
        .filter_map(|r| out_of_office_interval(r))
        .collect();

    let corrections = fix_log
        .filter(|r| r.is_approved())
        .and_then(|r| match &r.detail {
            ExceptionDetail::FixLog { corrections, .. } => Some(corrections),
            _ => None,
        });

    let mut outcome = BackfillOutcome {
        slots: *raw,
        provenance: SlotValues::default(),
    };

    for slot in Slot::ALL {
        if !shift.is_active(slot) {
            *outcome.slots.get_mut(slot) = None;
            continue;
        }
        if raw.get(slot).is_some() {
            continue;
        }

        let covered = shift
            .nominal(slot)
            .filter(|nominal| intervals.iter().any(|interval| interval.contains(*nominal)));
        if let Some(nominal) = covered {
            debug!(%slot, %nominal, "slot filled from out-of-office authorization");
            *outcome.slots.get_mut(slot) = Some(nominal);
            *outcome.provenance.get_mut(slot) = Provenance::OutOfOffice;
            continue;
        }

        if let Some(corrected) = corrections.and_then(|c| *c.get(slot)) {
            debug!(%slot, time = %corrected, "slot filled from fix log");
            *outcome.slots.get_mut(slot) = Some(corrected);
            *outcome.provenance.get_mut(slot) = Provenance::FixLog;
        }
    }

    outcome
}
