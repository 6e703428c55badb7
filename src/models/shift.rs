//! Shift schedule model.
//!
//! A [`ShiftWindow`] says, for each of the four daily slots, whether a punch is
//! expected, which clock-time window a punch must fall in to count for the
//! slot, and the nominal time used for lateness. Schedules are assembled from
//! the AM/PM/AMPM shift assignments an employee carries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock_time::{ClockTime, TimeWindow};
use super::slot::{Slot, SlotValues};

/// Schedule for a single slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSchedule {
    /// Whether a punch is expected in this slot.
    pub active: bool,
    /// Explicit punch window; `None` means the configured fallback applies.
    #[serde(default)]
    pub window: Option<TimeWindow>,
    /// Nominal time for lateness; `None` means the slot never counts as late.
    #[serde(default)]
    pub nominal_time: Option<ClockTime>,
}

impl SlotSchedule {
    /// A slot with no expected punch.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// A slot that expects a punch exactly when the shift names a time for
    /// it. A window alone does not make a slot active.
    pub fn expected(window: Option<TimeWindow>, nominal_time: Option<ClockTime>) -> Self {
        Self {
            active: nominal_time.is_some(),
            window,
            nominal_time,
        }
    }
}

/// Slot-group credit weights.
///
/// The two AM slots share `am`, the two PM slots share `pm`, and a
/// combined-mode shift (only AM-in and PM-out active) uses `ampm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditWeights {
    /// Weight of a complete morning.
    pub am: Decimal,
    /// Weight of a complete afternoon.
    pub pm: Decimal,
    /// Weight of a complete combined-mode day.
    pub ampm: Decimal,
}

impl Default for CreditWeights {
    fn default() -> Self {
        Self {
            am: Decimal::new(5, 1),
            pm: Decimal::new(5, 1),
            ampm: Decimal::ONE,
        }
    }
}

/// The mode of a single shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftMode {
    /// Morning half-day shift.
    Am,
    /// Afternoon half-day shift.
    Pm,
    /// Whole-day shift punched only at arrival and departure.
    Ampm,
}

impl ShiftMode {
    /// Parses the upstream mode label (`AM`, `PM`, `AMPM`, `AM-PM`, `WHOLE DAY`).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "AM" | "MORNING" => Some(ShiftMode::Am),
            "PM" | "AFTERNOON" => Some(ShiftMode::Pm),
            "AMPM" | "WHOLEDAY" | "FULLDAY" => Some(ShiftMode::Ampm),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShiftMode::Am => "AM",
            ShiftMode::Pm => "PM",
            ShiftMode::Ampm => "AMPM",
        })
    }
}

/// One shift assigned to an employee, as delivered by the schedule store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Shift name.
    pub name: String,
    /// Which half (or both) of the day the shift covers.
    pub mode: ShiftMode,
    /// Nominal arrival time.
    #[serde(default)]
    pub check_in: Option<ClockTime>,
    /// Accepted arrival window.
    #[serde(default)]
    pub check_in_window: Option<TimeWindow>,
    /// Nominal departure time.
    #[serde(default)]
    pub check_out: Option<ClockTime>,
    /// Accepted departure window.
    #[serde(default)]
    pub check_out_window: Option<TimeWindow>,
    /// Credit weight of this assignment; defaults by mode when absent.
    #[serde(default)]
    pub credit: Option<Decimal>,
}

/// An employee's effective daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Display name of the schedule.
    pub name: String,
    /// Per-slot schedule.
    pub slots: SlotValues<SlotSchedule>,
    /// Slot-group credit weights.
    #[serde(default)]
    pub credits: CreditWeights,
}

impl ShiftWindow {
    /// True when only AM-in and PM-out are active.
    pub fn combined_mode(&self) -> bool {
        self.slots.am_in.active
            && self.slots.pm_out.active
            && !self.slots.am_out.active
            && !self.slots.pm_in.active
    }

    /// Whether `slot` expects a punch.
    pub fn is_active(&self, slot: Slot) -> bool {
        self.slots.get(slot).active
    }

    /// Number of slots expecting a punch.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|(_, s)| s.active).count()
    }

    /// Nominal time of an active slot.
    pub fn nominal(&self, slot: Slot) -> Option<ClockTime> {
        let schedule = self.slots.get(slot);
        if schedule.active {
            schedule.nominal_time
        } else {
            None
        }
    }

    /// The window punches for `slot` must fall in, or `None` for an inactive slot.
    pub fn effective_window(
        &self,
        slot: Slot,
        fallbacks: &SlotValues<TimeWindow>,
    ) -> Option<TimeWindow> {
        let schedule = self.slots.get(slot);
        if !schedule.active {
            return None;
        }
        Some(schedule.window.unwrap_or(*fallbacks.get(slot)))
    }

    /// Assembles the daily schedule from an employee's shift assignments.
    ///
    /// Assignments are expected most-recent first. The first AMPM assignment
    /// wins outright and produces a combined-mode schedule. Otherwise the
    /// first AM assignment fills the morning slots and the first PM
    /// assignment fills the afternoon slots.
    ///
    /// # Returns
    ///
    /// `None` when there are no assignments, i.e. the employee is unscheduled.
    ///
    /// # Example
    ///
    /// ```
    /// use dtr_engine::models::{ShiftAssignment, ShiftMode, ShiftWindow};
    ///
    /// let whole_day = ShiftAssignment {
    ///     name: "Regular".to_string(),
    ///     mode: ShiftMode::Ampm,
    ///     check_in: "08:00".parse().ok(),
    ///     check_in_window: None,
    ///     check_out: "17:00".parse().ok(),
    ///     check_out_window: None,
    ///     credit: None,
    /// };
    /// let shift = ShiftWindow::from_assignments(&[whole_day]).unwrap();
    /// assert!(shift.combined_mode());
    /// assert!(ShiftWindow::from_assignments(&[]).is_none());
    /// ```
    pub fn from_assignments(assignments: &[ShiftAssignment]) -> Option<Self> {
        let mut credits = CreditWeights::default();

        if let Some(whole) = assignments.iter().find(|a| a.mode == ShiftMode::Ampm) {
            if let Some(credit) = whole.credit {
                credits.ampm = credit;
            }
            let slots = SlotValues {
                am_in: SlotSchedule::expected(whole.check_in_window, whole.check_in),
                am_out: SlotSchedule::inactive(),
                pm_in: SlotSchedule::inactive(),
                pm_out: SlotSchedule::expected(whole.check_out_window, whole.check_out),
            };
            return Some(Self {
                name: whole.name.clone(),
                slots,
                credits,
            });
        }

        let morning = assignments.iter().find(|a| a.mode == ShiftMode::Am);
        let afternoon = assignments.iter().find(|a| a.mode == ShiftMode::Pm);
        if morning.is_none() && afternoon.is_none() {
            return None;
        }

        let mut slots = SlotValues::<SlotSchedule>::default();
        if let Some(am) = morning {
            slots.am_in = SlotSchedule::expected(am.check_in_window, am.check_in);
            slots.am_out = SlotSchedule::expected(am.check_out_window, am.check_out);
            if let Some(credit) = am.credit {
                credits.am = credit;
            }
        }
        if let Some(pm) = afternoon {
            slots.pm_in = SlotSchedule::expected(pm.check_in_window, pm.check_in);
            slots.pm_out = SlotSchedule::expected(pm.check_out_window, pm.check_out);
            if let Some(credit) = pm.credit {
                credits.pm = credit;
            }
        }

        let name = match (morning, afternoon) {
            (Some(am), Some(pm)) if am.name != pm.name => format!("{} / {}", am.name, pm.name),
            (Some(am), _) => am.name.clone(),
            (None, Some(pm)) => pm.name.clone(),
            (None, None) => String::new(),
        };

        Some(Self {
            name,
            slots,
            credits,
        })
    }
}
